use super::details::model::transaction_tab_key;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::lookup_field::LookupField;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LOOKUP;
use leptos::prelude::*;

#[component]
pub fn TransactionLookup() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let open_transaction = Callback::new(move |id: String| {
        tabs_store.open_tab(&transaction_tab_key(&id), &detail_tab_label("Transaction", &id));
    });

    view! {
        <PageFrame page_id="a004_transaction--lookup" category=PAGE_CAT_LOOKUP>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Transactions"</h1>
                </div>
            </div>
            <div class="page__content">
                <LookupField
                    label="Transaction id"
                    placeholder="e.g. txn_3Pq..."
                    on_open=open_transaction
                />
            </div>
        </PageFrame>
    }
}
