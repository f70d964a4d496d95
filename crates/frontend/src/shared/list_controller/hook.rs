use contracts::shared::list_query::{ListQuery, ListResult, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use super::controller::{Dispatch, ListController, ListViewModel};
use crate::shared::api_utils::FetchError;
use crate::shared::config::SEARCH_DEBOUNCE_MS;
use crate::shared::debounce::{use_debounced, DebouncedInput};
use crate::shared::request_token::RequestToken;

type ListFuture<T> = Pin<Box<dyn Future<Output = Result<ListResult<T>, FetchError>>>>;
type ListFetcher<T> = Rc<dyn Fn(ListQuery, RequestToken) -> ListFuture<T>>;

/// Reactive handles of one controller; all of them die with the owner.
struct Handles<T: Send + Sync + 'static> {
    view: RwSignal<ListViewModel<T>>,
    query: RwSignal<ListQuery>,
    controller: StoredValue<ListController<T>, LocalStorage>,
    fetcher: StoredValue<ListFetcher<T>, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for Handles<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Handles<T> {}

impl<T: Clone + Send + Sync + 'static> Handles<T> {
    /// Mirrors the controller into the signals the view reads.
    fn sync(self) {
        let snapshot = self
            .controller
            .try_with_value(|c| (c.view().clone(), c.query().clone()));
        if let Some((view, query)) = snapshot {
            self.view.try_set(view);
            self.query.try_set(query);
        }
    }

    fn apply(self, change: impl FnOnce(&mut ListController<T>) -> Option<Dispatch>) {
        let Some(dispatch) = self.controller.try_update_value(change).flatten() else {
            return;
        };
        self.sync();

        let Some(fetch) = self.fetcher.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let settled = dispatch.run(|query, token| fetch(query, token)).await;
            let changed = self
                .controller
                .try_update_value(|c| c.settle(settled))
                .unwrap_or(false);
            if changed {
                self.sync();
            }
        });
    }
}

/// Server-paginated, searchable, sortable list bound to the current component.
///
/// Search input is debounced; page, sort and page-size changes dispatch right
/// away. Unmounting the component cancels the in-flight request and drops any
/// pending search.
pub struct PaginatedList<T: Send + Sync + 'static> {
    handles: Handles<T>,
    /// Raw text of the search box, before debounce
    pub search_text: RwSignal<String>,
    search: DebouncedInput,
}

impl<T: Send + Sync + 'static> Clone for PaginatedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PaginatedList<T> {}

impl<T: Clone + Send + Sync + 'static> PaginatedList<T> {
    pub fn view(&self) -> RwSignal<ListViewModel<T>> {
        self.handles.view
    }

    pub fn query(&self) -> RwSignal<ListQuery> {
        self.handles.query
    }

    /// `page` is 1-based.
    pub fn set_page(&self, page: u32) {
        self.handles.apply(|c| c.set_page(page));
    }

    pub fn set_limit(&self, limit: u32) {
        self.handles.apply(|c| c.set_limit(limit));
    }

    pub fn set_sort(&self, field: String, order: SortOrder) {
        self.handles.apply(|c| c.set_sort(field, order));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.handles.apply(|c| c.toggle_sort(field));
    }

    pub fn reload(&self) {
        self.handles.apply(ListController::reload);
    }

    /// Search box keystroke; the query follows after the debounce window.
    pub fn on_search_input(&self, text: String) {
        self.search_text.set(text.clone());
        self.search.push(text);
    }

    pub fn clear_search(&self) {
        self.search_text.set(String::new());
        self.search.flush(String::new());
    }
}

/// Creates a paginated list for the current component and dispatches the
/// initial query.
pub fn use_paginated_list<T, F, Fut>(initial: ListQuery, fetch: F) -> PaginatedList<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ListQuery, RequestToken) -> Fut + 'static,
    Fut: Future<Output = Result<ListResult<T>, FetchError>> + 'static,
{
    let fetcher: ListFetcher<T> = Rc::new(move |query, token| Box::pin(fetch(query, token)));
    let handles = Handles {
        view: RwSignal::new(ListViewModel::default()),
        query: RwSignal::new(initial.clone()),
        controller: StoredValue::new_local(ListController::new(initial.clone())),
        fetcher: StoredValue::new_local(fetcher),
    };

    let search = use_debounced(
        initial.search.clone(),
        SEARCH_DEBOUNCE_MS,
        Callback::new(move |term: String| handles.apply(|c| c.set_search(term))),
    );

    on_cleanup(move || {
        handles.controller.try_update_value(|c| c.teardown());
    });

    handles.apply(ListController::reload);

    PaginatedList {
        handles,
        search_text: RwSignal::new(initial.search),
        search,
    }
}
