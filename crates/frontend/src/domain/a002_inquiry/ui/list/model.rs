//! API layer for the inquiries list

use contracts::domain::a002_inquiry::Inquiry;
use contracts::shared::list_query::{ListQuery, ListResult};

use crate::shared::api_utils::{self, FetchError};
use crate::shared::request_token::RequestToken;

pub const INQUIRIES_PATH: &str = "/api/inquiries";

/// Longest message excerpt shown in the table.
const PREVIEW_CHARS: usize = 80;

pub async fn fetch_inquiries(
    query: ListQuery,
    token: RequestToken,
) -> Result<ListResult<Inquiry>, FetchError> {
    api_utils::get_list(INQUIRIES_PATH, &query, &token, "Failed to fetch inquiries").await
}

/// First line of the message, cut at [`PREVIEW_CHARS`] characters.
pub fn message_preview(message: &str) -> String {
    let first_line = message.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim();
    if first_line.chars().count() <= PREVIEW_CHARS {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_preview() {
        assert_eq!(message_preview("\n  Hello there \nsecond line"), "Hello there");
        assert_eq!(message_preview(""), "");

        let long = "x".repeat(PREVIEW_CHARS + 5);
        let preview = message_preview(&long);
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 1);
        assert!(preview.ends_with('…'));
    }
}
