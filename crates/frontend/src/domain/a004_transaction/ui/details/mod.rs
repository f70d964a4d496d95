pub mod model;
pub mod view_model;

use self::model::transaction_tab_key;
use self::view_model::TransactionDetailsVm;
use crate::domain::a003_order::ui::details::model::order_tab_key;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::format::{format_datetime, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_transaction::Transaction;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TransactionDetail(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let vm = TransactionDetailsVm::new();
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let stored_id = StoredValue::new(id.clone());

    vm.load(id);
    on_cleanup(move || vm.teardown());

    Effect::new(move |_| {
        if let Some(reference) = vm.transaction.with(|t| t.as_ref().map(|t| t.reference.clone())) {
            let tab_key = transaction_tab_key(&stored_id.get_value());
            tabs_store.update_tab_title(&tab_key, &detail_tab_label("Transaction", &reference));
        }
    });

    let open_order = Callback::new(move |order_id: String| {
        tabs_store.open_tab(&order_tab_key(&order_id), &detail_tab_label("Order", &order_id));
    });

    view! {
        <PageFrame page_id="a004_transaction--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>
                        {move || {
                            vm.transaction
                                .with(|t| t.as_ref().map(|t| format!("Transaction {}", t.reference)))
                                .unwrap_or_else(|| "Transaction".to_string())
                        }}
                    </h2>
                    {move || vm.transaction.with(|t| t.as_ref().map(|t| t.status)).map(|status| view! {
                        <UiBadge variant=status.badge_variant().to_string()>{status.label()}</UiBadge>
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.load(stored_id.get_value())
                        disabled=Signal::derive(move || vm.loading.get())
                    >
                        {icon("refresh")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if vm.loading.get() && vm.transaction.with(Option::is_none) {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }
                        .into_any()
                    } else if let Some(err) = vm.error.get() {
                        view! { <div class="alert alert--error">{err}</div> }.into_any()
                    } else if let Some(transaction) = vm.transaction.get() {
                        view! { <TransactionBody transaction=transaction on_open_order=open_order /> }
                            .into_any()
                    } else {
                        view! { <div class="table-empty">"No data"</div> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn TransactionBody(transaction: Transaction, on_open_order: Callback<String>) -> impl IntoView {
    let order_id = transaction.order_id.clone();
    let amount_class = if transaction.signed_amount() < 0.0 {
        "amount amount--negative"
    } else {
        "amount"
    };

    view! {
        <div class="detail-card">
            <dl class="detail-list">
                <dt>"Kind"</dt>
                <dd>{transaction.kind.label()}</dd>
                <dt>"Amount"</dt>
                <dd class=amount_class>{format_money(transaction.signed_amount(), &transaction.currency)}</dd>
                <dt>"Method"</dt>
                <dd>{transaction.method.clone()}</dd>
                <dt>"Created"</dt>
                <dd>{format_datetime(&transaction.created_at)}</dd>
                <dt>"Order"</dt>
                <dd>
                    <a
                        href="#"
                        class="table__link"
                        on:click=move |e| {
                            e.prevent_default();
                            on_open_order.run(order_id.clone());
                        }
                    >
                        {transaction.order_id.clone()}
                    </a>
                </dd>
                {transaction.failure_reason.clone().map(|reason| view! {
                    <dt>"Failure"</dt>
                    <dd class="alert alert--error">{reason}</dd>
                })}
            </dl>
        </div>
    }
}
