//! API layer for order details

use contracts::domain::a003_order::Order;

use crate::shared::api_utils::{self, FetchError};
use crate::shared::request_token::RequestToken;

pub const ORDERS_PATH: &str = "/api/orders";
pub const ORDER_DETAIL_PREFIX: &str = "a003_order_detail_";

/// API path of order `id`; the id is typed by the user, so it is encoded.
pub fn order_path(id: &str) -> String {
    api_utils::entity_path(ORDERS_PATH, id)
}

pub async fn fetch_order(id: &str, token: &RequestToken) -> Result<Order, FetchError> {
    api_utils::get_json(&order_path(id), token, "Failed to fetch order").await
}

/// Tab key of the detail view for order `id`.
pub fn order_tab_key(id: &str) -> String {
    format!("{}{}", ORDER_DETAIL_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_path() {
        assert_eq!(order_path("SO-1001"), "/api/orders/SO-1001");
        assert_eq!(order_path("A/12"), "/api/orders/A%2F12");
        assert_eq!(order_tab_key("A/12"), "a003_order_detail_A/12");
    }
}
