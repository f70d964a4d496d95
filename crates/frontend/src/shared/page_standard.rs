//! Page categories for tab pages.
//!
//! Every page rendered inside a tab carries an `id` of the form
//! `{entity}--{category}` (e.g. `"a001_banner--list"`) and a
//! `data-page-category` attribute with one of the constants below.

/// Paginated table with search and sorting.
pub const PAGE_CAT_LIST: &str = "list";

/// Single-field form that opens a record by id.
pub const PAGE_CAT_LOOKUP: &str = "lookup";

/// Read-only view of one record.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_LOOKUP, PAGE_CAT_DETAIL];

/// `{entity}--{category}` with both halves non-empty and a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

/// BEM class list for the page root.
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_LOOKUP => "page page--lookup",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_banner--list"));
        assert!(is_valid_page_id("a003_order--lookup"));
        assert!(is_valid_page_id("a004_transaction--detail"));
        assert!(!is_valid_page_id("a001_banner"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_banner--dashboard"));
    }

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_DETAIL), "page page--detail");
    }
}
