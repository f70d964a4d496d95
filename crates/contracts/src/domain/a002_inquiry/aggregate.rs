use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    New,
    InProgress,
    Answered,
    Closed,
}

impl InquiryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::New => "New",
            InquiryStatus::InProgress => "In progress",
            InquiryStatus::Answered => "Answered",
            InquiryStatus::Closed => "Closed",
        }
    }

    /// Badge variant used by the list view
    pub fn badge_variant(&self) -> &'static str {
        match self {
            InquiryStatus::New => "warning",
            InquiryStatus::InProgress => "primary",
            InquiryStatus::Answered => "success",
            InquiryStatus::Closed => "neutral",
        }
    }
}

/// Customer inquiry sent through the storefront contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_new() {
        let inquiry: Inquiry = serde_json::from_str(
            r#"{
                "id": "q-7",
                "name": "Ann",
                "email": "ann@example.com",
                "subject": "Delivery",
                "message": "Where is my parcel?",
                "createdAt": "2026-10-01T08:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(inquiry.status, InquiryStatus::New);
        assert_eq!(inquiry.status.badge_variant(), "warning");
    }
}
