//! API layer and column model for the banners list

use contracts::domain::a001_banner::Banner;
use contracts::shared::list_query::{ListQuery, ListResult};

use crate::shared::api_utils::{self, FetchError};
use crate::shared::request_token::RequestToken;
use crate::shared::select_dropdown::SelectableItem;

pub const BANNERS_PATH: &str = "/api/banners";

pub async fn fetch_banners(
    query: ListQuery,
    token: RequestToken,
) -> Result<ListResult<Banner>, FetchError> {
    api_utils::get_list(BANNERS_PATH, &query, &token, "Failed to fetch banners").await
}

pub fn banner_path(id: &str) -> String {
    api_utils::entity_path(BANNERS_PATH, id)
}

pub async fn delete_banner(id: &str) -> Result<(), FetchError> {
    api_utils::delete(&banner_path(id), "Failed to delete banner").await
}

/// Optional columns of the banners table. The actions column is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerColumn {
    Image,
    Title,
    Placement,
    Position,
    Status,
    Schedule,
    Created,
}

impl BannerColumn {
    pub const ALL: [BannerColumn; 7] = [
        BannerColumn::Image,
        BannerColumn::Title,
        BannerColumn::Placement,
        BannerColumn::Position,
        BannerColumn::Status,
        BannerColumn::Schedule,
        BannerColumn::Created,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BannerColumn::Image => "image",
            BannerColumn::Title => "title",
            BannerColumn::Placement => "placement",
            BannerColumn::Position => "position",
            BannerColumn::Status => "status",
            BannerColumn::Schedule => "schedule",
            BannerColumn::Created => "created",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BannerColumn::Image => "Image",
            BannerColumn::Title => "Title",
            BannerColumn::Placement => "Placement",
            BannerColumn::Position => "Position",
            BannerColumn::Status => "Status",
            BannerColumn::Schedule => "Schedule",
            BannerColumn::Created => "Created",
        }
    }

    /// Server-side sort field; `None` for columns the API cannot sort by.
    pub fn sort_field(self) -> Option<&'static str> {
        match self {
            BannerColumn::Title => Some("title"),
            BannerColumn::Placement => Some("placement"),
            BannerColumn::Position => Some("position"),
            BannerColumn::Status => Some("isActive"),
            BannerColumn::Created => Some("createdAt"),
            BannerColumn::Image | BannerColumn::Schedule => None,
        }
    }

    pub fn min_width(self) -> f64 {
        match self {
            BannerColumn::Image => 96.0,
            BannerColumn::Title => 240.0,
            BannerColumn::Schedule => 220.0,
            BannerColumn::Created => 140.0,
            _ => 100.0,
        }
    }

    pub fn defaults() -> Vec<BannerColumn> {
        Self::ALL
            .into_iter()
            .filter(|c| *c != BannerColumn::Schedule)
            .collect()
    }
}

impl SelectableItem for BannerColumn {
    fn id(&self) -> String {
        self.key().to_string()
    }

    fn display_name(&self) -> String {
        self.label().to_string()
    }
}

/// Visible columns in table order, whatever order they were picked in.
pub fn ordered(selected: &[BannerColumn]) -> Vec<BannerColumn> {
    BannerColumn::ALL
        .into_iter()
        .filter(|c| selected.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_path() {
        assert_eq!(banner_path("b-1"), "/api/banners/b-1");
        assert_eq!(banner_path("b 1/x"), "/api/banners/b%201%2Fx");
    }

    #[test]
    fn test_ordered_follows_table_order() {
        let picked = vec![
            BannerColumn::Created,
            BannerColumn::Title,
            BannerColumn::Image,
        ];
        assert_eq!(
            ordered(&picked),
            vec![
                BannerColumn::Image,
                BannerColumn::Title,
                BannerColumn::Created
            ]
        );
        assert!(ordered(&[]).is_empty());
    }

    #[test]
    fn test_defaults_hide_schedule() {
        let defaults = BannerColumn::defaults();
        assert_eq!(defaults.len(), BannerColumn::ALL.len() - 1);
        assert!(!defaults.contains(&BannerColumn::Schedule));
    }

    #[test]
    fn test_column_ids_are_unique() {
        let mut ids: Vec<String> = BannerColumn::ALL.iter().map(SelectableItem::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BannerColumn::ALL.len());
        assert_eq!(BannerColumn::Image.sort_field(), None);
        assert_eq!(BannerColumn::Status.sort_field(), Some("isActive"));
    }
}
