//! ViewModel for transaction details

use super::model::fetch_transaction;
use crate::shared::request_token::RequestSlot;
use contracts::domain::a004_transaction::Transaction;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct TransactionDetailsVm {
    pub transaction: RwSignal<Option<Transaction>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    requests: StoredValue<RequestSlot, LocalStorage>,
}

impl TransactionDetailsVm {
    pub fn new() -> Self {
        Self {
            transaction: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            requests: StoredValue::new_local(RequestSlot::new()),
        }
    }

    pub fn load(&self, id: String) {
        let Some(token) = self.requests.try_update_value(|slot| slot.issue()) else {
            return;
        };
        self.loading.set(true);
        self.error.set(None);

        let this = *self;
        spawn_local(async move {
            let outcome = fetch_transaction(&id, &token).await;
            if !this
                .requests
                .try_update_value(|slot| slot.settle(&token))
                .unwrap_or(false)
            {
                log::debug!("transaction #{} response discarded", token.id());
                return;
            }
            match outcome {
                Ok(transaction) => {
                    this.transaction.try_set(Some(transaction));
                }
                Err(e) => {
                    log::warn!("transaction {} load failed: {}", id, e);
                    this.error.try_set(Some(e.to_string()));
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn teardown(&self) {
        self.requests.try_update_value(|slot| slot.cancel());
    }
}

impl Default for TransactionDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
