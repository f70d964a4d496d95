//! Tab labels: every tab title is resolved here.

use crate::domain::a003_order::ui::details::model::ORDER_DETAIL_PREFIX;
use crate::domain::a004_transaction::ui::details::model::TRANSACTION_DETAIL_PREFIX;

/// Title of the list or page with this key; "" when unknown.
pub fn list_label(key: &str) -> &'static str {
    match key {
        "a001_banner" => "Banners",
        "a002_inquiry" => "Inquiries",
        "a003_order_lookup" => "Orders",
        "a004_transaction_lookup" => "Transactions",
        _ => "",
    }
}

/// Tab title for any key, detail tabs included.
/// Falls back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(id) = key.strip_prefix(ORDER_DETAIL_PREFIX) {
        return detail_tab_label("Order", id);
    }
    if let Some(id) = key.strip_prefix(TRANSACTION_DETAIL_PREFIX) {
        return detail_tab_label("Transaction", id);
    }
    match list_label(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

/// Title of a detail tab: `<entity> · <identifier>`.
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_order::ui::details::model::order_tab_key;
    use crate::domain::a004_transaction::ui::details::model::transaction_tab_key;

    #[test]
    fn test_tab_label_for_key() {
        assert_eq!(tab_label_for_key("a001_banner"), "Banners");
        assert_eq!(tab_label_for_key(&order_tab_key("1042")), "Order · 1042");
        assert_eq!(
            tab_label_for_key(&transaction_tab_key("txn_9")),
            "Transaction · txn_9"
        );
        assert_eq!(tab_label_for_key("unknown_key"), "unknown_key");
    }
}
