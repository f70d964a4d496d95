//! Tab content registry: the single mapping from tab key to view
//!
//! `render_tab_content` returns the view for a tab key. Every tab key is
//! resolved here.

use crate::domain::a001_banner::ui::list::BannerList;
use crate::domain::a002_inquiry::ui::list::InquiryList;
use crate::domain::a003_order::ui::details::model::ORDER_DETAIL_PREFIX;
use crate::domain::a003_order::ui::details::OrderDetail;
use crate::domain::a003_order::ui::lookup::OrderLookup;
use crate::domain::a004_transaction::ui::details::model::TRANSACTION_DETAIL_PREFIX;
use crate::domain::a004_transaction::ui::details::TransactionDetail;
use crate::domain::a004_transaction::ui::lookup::TransactionLookup;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Renders the content of the tab with `key`.
///
/// # Arguments
/// * `key` - unique tab key (e.g. "a001_banner", "a003_order_detail_42")
/// * `tabs_store` - context used by detail views to close their own tab
///
/// # Returns
/// The tab content as `AnyView`, or a placeholder for unknown keys
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    match key {
        // a001: Banners
        "a001_banner" => view! { <BannerList /> }.into_any(),

        // a002: Inquiries
        "a002_inquiry" => view! { <InquiryList /> }.into_any(),

        // a003: Orders
        "a003_order_lookup" => view! { <OrderLookup /> }.into_any(),
        k if k.starts_with(ORDER_DETAIL_PREFIX) => {
            let id = k[ORDER_DETAIL_PREFIX.len()..].to_string();
            view! { <OrderDetail id=id on_close=close /> }.into_any()
        }

        // a004: Transactions
        "a004_transaction_lookup" => view! { <TransactionLookup /> }.into_any(),
        k if k.starts_with(TRANSACTION_DETAIL_PREFIX) => {
            let id = k[TRANSACTION_DETAIL_PREFIX.len()..].to_string();
            view! { <TransactionDetail id=id on_close=close /> }.into_any()
        }

        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
