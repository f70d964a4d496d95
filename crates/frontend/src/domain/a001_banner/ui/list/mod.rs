pub mod model;

use self::model::{delete_banner, fetch_banners, ordered, BannerColumn};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::config::DEFAULT_PAGE_SIZE;
use crate::shared::format::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_controller::use_paginated_list;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::select_dropdown::SelectDropdown;
use crate::shared::toast::use_toasts;
use chrono::{DateTime, Utc};
use contracts::domain::a001_banner::Banner;
use contracts::shared::list_query::{ListQuery, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Status badge text and variant at `now`.
fn banner_status(banner: &Banner, now: DateTime<Utc>) -> (&'static str, &'static str) {
    if !banner.is_active {
        ("Inactive", "neutral")
    } else if banner.is_live_at(now) {
        ("Live", "success")
    } else {
        ("Scheduled", "warning")
    }
}

fn schedule_text(banner: &Banner) -> String {
    match (&banner.starts_at, &banner.ends_at) {
        (None, None) => "Always".to_string(),
        (Some(start), None) => format!("from {}", format_datetime(start)),
        (None, Some(end)) => format!("until {}", format_datetime(end)),
        (Some(start), Some(end)) => {
            format!("{} - {}", format_datetime(start), format_datetime(end))
        }
    }
}

/// Cell of `column`. Views must own their data, so every field is copied out
/// of `banner` before it goes into `view!`.
fn banner_cell(column: BannerColumn, banner: &Banner, now: DateTime<Utc>) -> AnyView {
    match column {
        BannerColumn::Image => {
            let src = banner.image_url.clone();
            let alt = banner.title.clone();
            view! {
                <TableCell>
                    <TableCellLayout>
                        <img class="banner-thumb" src=src alt=alt loading="lazy" />
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        BannerColumn::Title => {
            let title = banner.title.clone();
            let subtitle = banner.subtitle.clone();
            let link = banner.link_url.clone();
            view! {
                <TableCell>
                    <TableCellLayout truncate=true>
                        <div class="banner-title">
                            <strong>{title}</strong>
                            {subtitle.map(|s| view! { <div class="banner-title__sub">{s}</div> })}
                            {link.map(|href| view! {
                                <a class="table__link" href=href.clone() target="_blank" rel="noopener">{href.clone()}</a>
                            })}
                        </div>
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        BannerColumn::Placement => {
            let placement = banner.placement.label();
            view! {
                <TableCell>
                    <TableCellLayout>{placement}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        BannerColumn::Position => {
            let position = banner.position;
            view! {
                <TableCell>
                    <TableCellLayout>
                        <span style="font-variant-numeric: tabular-nums;">{position}</span>
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        BannerColumn::Status => {
            let (label, variant) = banner_status(banner, now);
            view! {
                <TableCell>
                    <TableCellLayout>
                        <UiBadge variant=variant.to_string()>{label}</UiBadge>
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        BannerColumn::Schedule => {
            let schedule = schedule_text(banner);
            view! {
                <TableCell>
                    <TableCellLayout truncate=true>{schedule}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        BannerColumn::Created => {
            let created = format_date(&banner.created_at);
            view! {
                <TableCell>
                    <TableCellLayout>{created}</TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
    }
}

fn confirm_delete(title: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("Delete banner \"{}\"?", title))
                .ok()
        })
        .unwrap_or(false)
}

#[component]
pub fn BannerList() -> impl IntoView {
    let toasts = use_toasts();
    let list = use_paginated_list(
        ListQuery::new(DEFAULT_PAGE_SIZE).sorted_by("position", SortOrder::Asc),
        fetch_banners,
    );
    let view_model = list.view();
    let query = list.query();

    let visible = RwSignal::new(BannerColumn::defaults());
    let deleting = RwSignal::new(None::<String>);

    let loading = Signal::derive(move || view_model.with(|v| v.loading));
    let current_sort_field = Signal::derive(move || query.with(|q| q.sort_field().to_string()));
    let sort_order = Signal::derive(move || query.with(|q| q.sort_order_or_default()));
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    let on_delete = move |id: String, title: String| {
        if !confirm_delete(&title) {
            return;
        }
        deleting.set(Some(id.clone()));
        spawn_local(async move {
            match delete_banner(&id).await {
                Ok(()) => {
                    log::info!("banner {} deleted", id);
                    toasts.success(format!("Banner \"{}\" deleted", title));
                    list.reload();
                }
                Err(e) => {
                    log::warn!("banner {} delete failed: {}", id, e);
                    toasts.error(e.to_string());
                }
            }
            deleting.try_set(None);
        });
    };

    let header_cells = move || {
        visible
            .get()
            .into_iter()
            .map(|column| match column.sort_field() {
                Some(field) => view! {
                    <SortableHeaderCell
                        label=column.label()
                        sort_field=field
                        current_sort_field=current_sort_field
                        sort_order=sort_order
                        on_sort=on_sort
                        min_width=column.min_width()
                    />
                }
                .into_any(),
                None => view! {
                    <TableHeaderCell min_width=column.min_width()>{column.label()}</TableHeaderCell>
                }
                .into_any(),
            })
            .collect_view()
    };

    let rows = move || {
        let columns = visible.get();
        let now = Utc::now();
        view_model
            .with(|v| v.items.clone())
            .into_iter()
            .map(|banner| {
                let id = banner.id.clone();
                let id_for_disabled = banner.id.clone();
                let title = banner.title.clone();
                let cells = columns
                    .iter()
                    .map(|column| banner_cell(*column, &banner, now))
                    .collect_view();
                view! {
                    <TableRow>
                        {cells}
                        <TableCell>
                            <TableCellLayout>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    disabled=Signal::derive(move || {
                                        deleting.with(|d| d.as_deref() == Some(id_for_disabled.as_str()))
                                    })
                                    on_click=move |_| on_delete(id.clone(), title.clone())
                                >
                                    {icon("trash")}
                                </Button>
                            </TableCellLayout>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="a001_banner--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Banners"</h1>
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
                                placeholder="Search banners..."
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

                        <div class="filter-panel-header__right" style="min-width: 280px;">
                            {icon("columns")}
                            <SelectDropdown
                                items=Signal::derive(|| BannerColumn::ALL.to_vec())
                                initial_selected=BannerColumn::defaults()
                                placeholder="Add column..."
                                on_change=Callback::new(move |columns: Vec<BannerColumn>| {
                                    visible.set(ordered(&columns));
                                })
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
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        {header_cells}
                                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>{rows}</TableBody>
                            </Table>
                            <Show when=move || view_model.with(|v| v.is_empty())>
                                <div class="table-empty">"No banners found"</div>
                            </Show>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
