//! API layer for transaction details

use contracts::domain::a004_transaction::Transaction;

use crate::shared::api_utils::{self, FetchError};
use crate::shared::request_token::RequestToken;

pub const TRANSACTIONS_PATH: &str = "/api/transactions";
pub const TRANSACTION_DETAIL_PREFIX: &str = "a004_transaction_detail_";

pub fn transaction_path(id: &str) -> String {
    api_utils::entity_path(TRANSACTIONS_PATH, id)
}

pub async fn fetch_transaction(id: &str, token: &RequestToken) -> Result<Transaction, FetchError> {
    api_utils::get_json(&transaction_path(id), token, "Failed to fetch transaction").await
}

pub fn transaction_tab_key(id: &str) -> String {
    format!("{}{}", TRANSACTION_DETAIL_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_path() {
        assert_eq!(transaction_path("txn_9"), "/api/transactions/txn_9");
        assert_eq!(transaction_path("x?y"), "/api/transactions/x%3Fy");
    }
}
