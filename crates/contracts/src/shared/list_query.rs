//! Paginated search contract used by every list endpoint.
//!
//! Request: `?page=1&limit=25&search=...&sortBy=...&sortOrder=asc`
//! Response: `{ "data": [...], "pagination": { "currentPage", "totalPages", "total" } }`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Asc
    }
}

/// One request of a paginated list. A new value supersedes the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// 1-based
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl ListQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            search: String::new(),
            sort_by: None,
            sort_order: None,
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = Some(order);
        self
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// A new search term re-paginates from the first page.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            page: 1,
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_sort(&self, field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            sort_by: Some(field.into()),
            sort_order: Some(order),
            ..self.clone()
        }
    }

    pub fn with_limit(&self, limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            ..self.clone()
        }
    }

    pub fn sort_field(&self) -> &str {
        self.sort_by.as_deref().unwrap_or("")
    }

    pub fn sort_order_or_default(&self) -> SortOrder {
        self.sort_order.unwrap_or_default()
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(25)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total: u64,
}

/// Response envelope of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// One page of a list, as consumed by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl<T> ListResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            total: 0,
        }
    }
}

/// Number of pages needed to show `total` rows at `limit` rows per page.
pub fn total_pages_for(total: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX)
}

impl<T> PaginatedResponse<T> {
    /// Converts the envelope into a page for `query`.
    ///
    /// Servers that leave `totalPages`/`currentPage` out get them derived from
    /// `total`, `limit` and the requested page.
    pub fn into_result(self, query: &ListQuery) -> ListResult<T> {
        let Pagination {
            current_page,
            total_pages,
            total,
        } = self.pagination;

        let total_pages = if total_pages == 0 && total > 0 {
            total_pages_for(total, query.limit)
        } else {
            total_pages
        };
        let page = if current_page == 0 { query.page } else { current_page };

        ListResult {
            items: self.data,
            page,
            total_pages,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_search_resets_page() {
        let query = ListQuery::new(10).with_page(4);
        assert_eq!(query.page, 4);

        let searched = query.with_search("x");
        assert_eq!(searched.page, 1);
        assert_eq!(searched.search, "x");
        assert_eq!(searched.limit, 10);
    }

    #[test]
    fn test_page_and_limit_are_clamped() {
        let query = ListQuery::new(0).with_page(0);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 1);
    }

    #[test]
    fn test_total_pages_for() {
        assert_eq!(total_pages_for(25, 10), 3);
        assert_eq!(total_pages_for(30, 10), 3);
        assert_eq!(total_pages_for(0, 10), 0);
        assert_eq!(total_pages_for(1, 0), 1);
    }

    #[test]
    fn test_query_serializes_camel_case_and_omits_unset_sort() {
        let plain = serde_json::to_value(ListQuery::new(10)).unwrap();
        assert_eq!(plain, json!({ "page": 1, "limit": 10, "search": "" }));

        let sorted = serde_json::to_value(ListQuery::new(10).sorted_by("title", SortOrder::Desc)).unwrap();
        assert_eq!(sorted["sortBy"], "title");
        assert_eq!(sorted["sortOrder"], "desc");
    }

    #[test]
    fn test_response_envelope_parses() {
        let body = json!({
            "data": [{ "id": 1 }, { "id": 2 }],
            "pagination": { "currentPage": 2, "totalPages": 3, "total": 25 }
        });
        let response: PaginatedResponse<serde_json::Value> = serde_json::from_value(body).unwrap();
        let result = response.into_result(&ListQuery::new(10).with_page(2));

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.page, 2);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.total, 25);
    }

    #[test]
    fn test_missing_total_pages_is_derived() {
        let body = json!({ "data": [], "pagination": { "total": 25 } });
        let response: PaginatedResponse<serde_json::Value> = serde_json::from_value(body).unwrap();
        let result = response.into_result(&ListQuery::new(10));

        assert_eq!(result.total_pages, 3);
        assert_eq!(result.page, 1);
    }

    #[test]
    fn test_empty_result_is_not_an_error_shape() {
        let body = json!({ "data": [], "pagination": { "currentPage": 1, "totalPages": 0, "total": 0 } });
        let response: PaginatedResponse<serde_json::Value> = serde_json::from_value(body).unwrap();
        let result = response.into_result(&ListQuery::new(10));

        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert!(SortOrder::default().is_ascending());
    }
}
