use super::details::model::order_tab_key;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::lookup_field::LookupField;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LOOKUP;
use leptos::prelude::*;

/// Opens an order detail tab by order id.
#[component]
pub fn OrderLookup() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let open_order = Callback::new(move |id: String| {
        tabs_store.open_tab(&order_tab_key(&id), &detail_tab_label("Order", &id));
    });

    view! {
        <PageFrame page_id="a003_order--lookup" category=PAGE_CAT_LOOKUP>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                </div>
            </div>
            <div class="page__content">
                <LookupField
                    label="Order id"
                    placeholder="e.g. 1042"
                    on_open=open_order
                />
            </div>
        </PageFrame>
    }
}
