pub mod model;
pub mod view_model;

use self::model::order_tab_key;
use self::view_model::OrderDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::format::{format_datetime, format_money};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_order::Order;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetail(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let vm = OrderDetailsVm::new();
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let stored_id = StoredValue::new(id.clone());

    vm.load(id);
    on_cleanup(move || vm.teardown());

    Effect::new(move |_| {
        if let Some(number) = vm.order.with(|o| o.as_ref().map(|o| o.order_number.clone())) {
            let tab_key = order_tab_key(&stored_id.get_value());
            tabs_store.update_tab_title(&tab_key, &detail_tab_label("Order", &number));
        }
    });

    view! {
        <PageFrame page_id="a003_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h2>
                        {move || {
                            vm.order
                                .with(|o| o.as_ref().map(|o| format!("Order #{}", o.order_number)))
                                .unwrap_or_else(|| "Order".to_string())
                        }}
                    </h2>
                    {move || vm.order.with(|o| o.as_ref().map(|o| o.status)).map(|status| view! {
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
                    if vm.loading.get() && vm.order.with(Option::is_none) {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }
                        .into_any()
                    } else if let Some(err) = vm.error.get() {
                        view! { <div class="alert alert--error">{err}</div> }.into_any()
                    } else if let Some(order) = vm.order.get() {
                        view! { <OrderBody order=order /> }.into_any()
                    } else {
                        view! { <div class="table-empty">"No data"</div> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn OrderBody(order: Order) -> impl IntoView {
    let currency = order.currency.clone();
    let money = move |value: f64| format_money(value, &currency);

    let address = order
        .shipping_address
        .as_ref()
        .map(|a| a.one_line())
        .unwrap_or_else(|| "-".to_string());

    let lines = order.lines.clone();
    let rows = lines
        .into_iter()
        .map(|line| {
            let amount = money(line.amount());
            let unit_price = money(line.unit_price);
            view! {
                <TableRow>
                    <TableCell>
                        <TableCellLayout truncate=true>{line.name}</TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>{line.sku.unwrap_or_else(|| "-".to_string())}</TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>{line.quantity}</TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>{unit_price}</TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>{amount}</TableCellLayout>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="detail-grid">
            <div class="detail-card">
                <h3>"Order"</h3>
                <dl class="detail-list">
                    <dt>"Placed"</dt>
                    <dd>{format_datetime(&order.placed_at)}</dd>
                    <dt>"Status"</dt>
                    <dd>{order.status.label()}</dd>
                    <dt>"Id"</dt>
                    <dd><code>{order.id.clone()}</code></dd>
                </dl>
            </div>
            <div class="detail-card">
                <h3>"Customer"</h3>
                <dl class="detail-list">
                    <dt>"Name"</dt>
                    <dd>{order.customer_name.clone()}</dd>
                    <dt>"Email"</dt>
                    <dd>
                        <a class="table__link" href=format!("mailto:{}", order.customer_email)>
                            {order.customer_email.clone()}
                        </a>
                    </dd>
                    <dt>"Ship to"</dt>
                    <dd>{address}</dd>
                </dl>
            </div>
        </div>

        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=240.0>"Product"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"SKU"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>"Qty"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Unit price"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Amount"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
        </div>

        <dl class="detail-list detail-list--totals">
            <dt>"Subtotal"</dt>
            <dd>{money(order.subtotal)}</dd>
            <dt>"Shipping"</dt>
            <dd>{money(order.shipping)}</dd>
            <dt>"Discount"</dt>
            <dd>{money(-order.discount)}</dd>
            <dt><strong>"Total"</strong></dt>
            <dd><strong>{money(order.total)}</strong></dd>
        </dl>
    }
}
