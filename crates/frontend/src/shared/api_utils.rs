//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Every request helper returns [`FetchError`], which keeps a cancelled
//! request apart from a genuine failure.

use contracts::shared::api_error::ApiErrorBody;
use contracts::shared::list_query::{ListQuery, ListResult, PaginatedResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::config::API_PORT;
use super::request_token::RequestToken;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Superseded or torn down; never shown to the user.
    #[error("request cancelled")]
    Cancelled,
    #[error("{0}")]
    Failed(String),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/banners/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `collection/{id}` with `id` percent-encoded as a single path segment.
pub fn entity_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

/// Builds `path?page=..&limit=..` for a list query.
pub fn list_url(path: &str, query: &ListQuery) -> Result<String, FetchError> {
    let qs = serde_qs::to_string(query)
        .map_err(|e| FetchError::Failed(format!("Invalid list query: {}", e)))?;
    Ok(format!("{}?{}", api_url(path), qs))
}

/// Error text for a non-2xx response: the server's `message` when it sent
/// one, otherwise the operation's fallback with the status code.
pub fn failure_message(status: u16, body: &str, fallback: &str) -> String {
    ApiErrorBody::message_from(body).unwrap_or_else(|| format!("{} (HTTP {})", fallback, status))
}

fn settle_error(token: Option<&RequestToken>, message: String) -> FetchError {
    if token.is_some_and(RequestToken::is_cancelled) {
        FetchError::Cancelled
    } else {
        FetchError::Failed(message)
    }
}

async fn send(
    builder: RequestBuilder,
    token: Option<&RequestToken>,
    fallback: &str,
) -> Result<Response, FetchError> {
    let signal = token.and_then(RequestToken::abort_signal);
    let response = builder
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| settle_error(token, format!("{}: {}", fallback, e)))?;

    if token.is_some_and(RequestToken::is_cancelled) {
        return Err(FetchError::Cancelled);
    }

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} {} -> {}", fallback, response.url(), status);
        return Err(settle_error(token, failure_message(status, &body, fallback)));
    }

    Ok(response)
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    token: Option<&RequestToken>,
    fallback: &str,
) -> Result<T, FetchError> {
    response
        .json::<T>()
        .await
        .map_err(|e| settle_error(token, format!("{}: invalid response: {}", fallback, e)))
}

/// GET a single entity, abortable through `token`.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    token: &RequestToken,
    fallback: &str,
) -> Result<T, FetchError> {
    let url = api_url(path);
    log::debug!("fetch #{} {}", token.id(), url);

    let response = send(Request::get(&url), Some(token), fallback).await?;
    read_json(response, Some(token), fallback).await
}

/// GET one page of a paginated list, abortable through `token`.
pub async fn get_list<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
    token: &RequestToken,
    fallback: &str,
) -> Result<ListResult<T>, FetchError> {
    let url = list_url(path, query)?;
    log::debug!("fetch #{} {}", token.id(), url);

    let response = send(Request::get(&url), Some(token), fallback).await?;
    let envelope: PaginatedResponse<T> = read_json(response, Some(token), fallback).await?;
    Ok(envelope.into_result(query))
}

/// DELETE an entity.
pub async fn delete(path: &str, fallback: &str) -> Result<(), FetchError> {
    send(Request::delete(&api_url(path)), None, fallback).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_server_message() {
        assert_eq!(
            failure_message(404, r#"{"message":"Banner not found"}"#, "Failed to delete banner"),
            "Banner not found"
        );
    }

    #[test]
    fn test_failure_message_fallback() {
        assert_eq!(
            failure_message(502, "Bad gateway", "Failed to fetch banners"),
            "Failed to fetch banners (HTTP 502)"
        );
        assert_eq!(
            failure_message(500, "", "Failed to fetch inquiries"),
            "Failed to fetch inquiries (HTTP 500)"
        );
    }

    #[test]
    fn test_entity_path_encodes_id() {
        assert_eq!(entity_path("/api/orders", "1042"), "/api/orders/1042");
        assert_eq!(entity_path("/api/orders", "A/12"), "/api/orders/A%2F12");
        assert_eq!(entity_path("/api/orders", "x?y"), "/api/orders/x%3Fy");
        assert_eq!(entity_path("/api/orders", "ab cd"), "/api/orders/ab%20cd");
    }

    #[test]
    fn test_query_string() {
        use contracts::shared::list_query::SortOrder;

        let query = ListQuery::new(10)
            .with_search("summer sale")
            .with_sort("title", SortOrder::Desc)
            .with_page(2);
        let qs = serde_qs::to_string(&query).unwrap();

        assert!(qs.contains("page=2"));
        assert!(qs.contains("limit=10"));
        assert!(qs.contains("search=summer"));
        assert!(qs.contains("sortBy=title"));
        assert!(qs.contains("sortOrder=desc"));

        let unsorted = serde_qs::to_string(&ListQuery::new(10)).unwrap();
        assert!(!unsorted.contains("sortBy"));
    }

    #[test]
    fn test_cancelled_token_classifies_as_cancelled() {
        use crate::shared::request_token::RequestSlot;

        let mut slot = RequestSlot::new();
        let token = slot.issue();
        assert_eq!(
            settle_error(Some(&token), "boom".to_string()),
            FetchError::Failed("boom".to_string())
        );
        slot.issue();
        assert_eq!(settle_error(Some(&token), "boom".to_string()), FetchError::Cancelled);
        assert_eq!(
            settle_error(None, "boom".to_string()),
            FetchError::Failed("boom".to_string())
        );
    }
}
