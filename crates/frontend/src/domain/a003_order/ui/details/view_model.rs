//! ViewModel for order details

use super::model::fetch_order;
use crate::shared::request_token::RequestSlot;
use contracts::domain::a003_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct OrderDetailsVm {
    pub order: RwSignal<Option<Order>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    requests: StoredValue<RequestSlot, LocalStorage>,
}

impl OrderDetailsVm {
    pub fn new() -> Self {
        Self {
            order: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            requests: StoredValue::new_local(RequestSlot::new()),
        }
    }

    /// Fetches order `id`; a newer call or [`teardown`](Self::teardown)
    /// discards the result of an older one.
    pub fn load(&self, id: String) {
        let Some(token) = self.requests.try_update_value(|slot| slot.issue()) else {
            return;
        };
        self.loading.set(true);
        self.error.set(None);

        let this = *self;
        spawn_local(async move {
            let outcome = fetch_order(&id, &token).await;
            let live = this
                .requests
                .try_update_value(|slot| slot.settle(&token))
                .unwrap_or(false);
            if !live {
                log::debug!("order #{} response discarded", token.id());
                return;
            }
            match outcome {
                Ok(order) => {
                    this.order.try_set(Some(order));
                }
                Err(e) => {
                    log::warn!("order {} load failed: {}", id, e);
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

impl Default for OrderDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
