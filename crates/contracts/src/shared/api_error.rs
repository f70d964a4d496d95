use serde::{Deserialize, Serialize};

/// Error payload returned by the API with a 4xx/5xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Parses a response body; anything that is not a JSON object with a
    /// non-blank `message` yields `None`.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"message":"Banner not found"}"#),
            Some("Banner not found".to_string())
        );
    }

    #[test]
    fn test_message_from_garbage() {
        assert_eq!(ApiErrorBody::message_from("<html>502</html>"), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"error":"x"}"#), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"message":"  "}"#), None);
    }
}
