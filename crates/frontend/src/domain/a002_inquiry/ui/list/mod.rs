pub mod model;

use self::model::{fetch_inquiries, message_preview};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::config::DEFAULT_PAGE_SIZE;
use crate::shared::format::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_controller::use_paginated_list;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::shared::list_query::{ListQuery, SortOrder};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InquiryList() -> impl IntoView {
    let list = use_paginated_list(
        ListQuery::new(DEFAULT_PAGE_SIZE).sorted_by("createdAt", SortOrder::Desc),
        fetch_inquiries,
    );
    let view_model = list.view();
    let query = list.query();

    let loading = Signal::derive(move || view_model.with(|v| v.loading));
    let current_sort_field = Signal::derive(move || query.with(|q| q.sort_field().to_string()));
    let sort_order = Signal::derive(move || query.with(|q| q.sort_order_or_default()));
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a002_inquiry--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inquiries"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || view_model.with(|v| v.total).to_string()}
                    </UiBadge>
                    <Show when=move || loading.get()>
                        <Spinner />
                    </Show>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.reload()
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                value=list.search_text
                                on_input=Callback::new(move |text: String| list.on_search_input(text))
                                on_clear=Callback::new(move |_| list.clear_search())
                                placeholder="Name, email or subject..."
                            />
                        </div>

                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || view_model.with(|v| v.page))
                                total_pages=Signal::derive(move || view_model.with(|v| v.total_pages))
                                total_count=Signal::derive(move || view_model.with(|v| v.total))
                                page_size=Signal::derive(move || query.with(|q| q.limit))
                                on_page_change=Callback::new(move |page| list.set_page(page))
                                on_page_size_change=Callback::new(move |limit| list.set_limit(limit))
                                disabled=loading
                            />
                        </div>
                    </div>
                </div>

                {move || match view_model.with(|v| v.error.clone()) {
                    Some(err) => view! {
                        <div class="alert alert--error">
                            <span>{err}</span>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.reload()>
                                "Retry"
                            </Button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 900px;">
                                <TableHeader>
                                    <TableRow>
                                        <SortableHeaderCell
                                            label="Received"
                                            sort_field="createdAt"
                                            current_sort_field=current_sort_field
                                            sort_order=sort_order
                                            on_sort=on_sort
                                            min_width=140.0
                                        />
                                        <SortableHeaderCell
                                            label="Name"
                                            sort_field="name"
                                            current_sort_field=current_sort_field
                                            sort_order=sort_order
                                            on_sort=on_sort
                                            min_width=160.0
                                        />
                                        <SortableHeaderCell
                                            label="Email"
                                            sort_field="email"
                                            current_sort_field=current_sort_field
                                            sort_order=sort_order
                                            on_sort=on_sort
                                            min_width=180.0
                                        />
                                        <SortableHeaderCell
                                            label="Subject"
                                            sort_field="subject"
                                            current_sort_field=current_sort_field
                                            sort_order=sort_order
                                            on_sort=on_sort
                                            min_width=240.0
                                        />
                                        <SortableHeaderCell
                                            label="Status"
                                            sort_field="status"
                                            current_sort_field=current_sort_field
                                            sort_order=sort_order
                                            on_sort=on_sort
                                        />
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || view_model.with(|v| v.items.clone()).into_iter().map(|inquiry| {
                                        let preview = message_preview(&inquiry.message);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{format_datetime(&inquiry.created_at)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {inquiry.name.clone()}
                                                        {inquiry.phone.clone().map(|p| view! {
                                                            <div class="table__secondary">{p}</div>
                                                        })}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a class="table__link" href=format!("mailto:{}", inquiry.email)>
                                                            {inquiry.email.clone()}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <strong>{inquiry.subject.clone()}</strong>
                                                        <div class="table__secondary" title=inquiry.message.clone()>
                                                            {preview}
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <UiBadge variant=inquiry.status.badge_variant().to_string()>
                                                            {inquiry.status.label()}
                                                        </UiBadge>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                            <Show when=move || view_model.with(|v| v.is_empty())>
                                <div class="table-empty">"No inquiries found"</div>
                            </Show>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
