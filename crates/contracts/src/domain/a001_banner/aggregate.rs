use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a banner is rendered on the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerPlacement {
    HomeHero,
    HomeStrip,
    Category,
    Checkout,
}

impl BannerPlacement {
    pub fn label(&self) -> &'static str {
        match self {
            BannerPlacement::HomeHero => "Home hero",
            BannerPlacement::HomeStrip => "Home strip",
            BannerPlacement::Category => "Category page",
            BannerPlacement::Checkout => "Checkout",
        }
    }
}

/// Promotional banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    pub placement: BannerPlacement,
    /// Display order inside the placement, lower first
    pub position: i32,
    pub is_active: bool,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Banner {
    /// Active and inside its schedule window at `now`.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.starts_at.map_or(true, |s| s <= now)
            && self.ends_at.map_or(true, |e| now < e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn banner() -> Banner {
        serde_json::from_str(
            r#"{
                "id": "b-1",
                "title": "Summer sale",
                "imageUrl": "https://cdn.example.com/summer.png",
                "placement": "home_hero",
                "position": 1,
                "isActive": true,
                "startsAt": "2026-06-01T00:00:00Z",
                "endsAt": "2026-09-01T00:00:00Z",
                "createdAt": "2026-05-20T10:00:00Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_banner() {
        let b = banner();
        assert_eq!(b.placement, BannerPlacement::HomeHero);
        assert_eq!(b.subtitle, None);
        assert_eq!(b.placement.label(), "Home hero");
    }

    #[test]
    fn test_is_live_at() {
        let b = banner();
        assert!(b.is_live_at(Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap()));
        assert!(!b.is_live_at(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap()));
        assert!(!Banner { is_active: false, ..b }.is_live_at(Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap()));
    }
}
