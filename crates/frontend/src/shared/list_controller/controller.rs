use contracts::shared::list_query::{ListQuery, ListResult, SortOrder};
use std::future::Future;

use crate::shared::api_utils::FetchError;
use crate::shared::request_token::{RequestSlot, RequestToken};

/// UI-ready state of a paginated list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel<T> {
    pub items: Vec<T>,
    /// 1-based page of `items`
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListViewModel<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            total: 0,
            loading: false,
            error: None,
        }
    }
}

impl<T> ListViewModel<T> {
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}

/// A request the controller wants performed.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub token: RequestToken,
    pub query: ListQuery,
}

/// Outcome of a dispatched request, ready to be fed back to the controller.
#[derive(Debug)]
pub struct Settled<T> {
    pub token: RequestToken,
    pub outcome: Result<ListResult<T>, FetchError>,
}

impl Dispatch {
    /// Performs the request with `fetch`. The controller is not borrowed while
    /// the request is in flight.
    pub async fn run<T, F, Fut>(self, fetch: F) -> Settled<T>
    where
        F: FnOnce(ListQuery, RequestToken) -> Fut,
        Fut: Future<Output = Result<ListResult<T>, FetchError>>,
    {
        let outcome = fetch(self.query, self.token.clone()).await;
        Settled {
            token: self.token,
            outcome,
        }
    }
}

/// Query state and view-model of one paginated list.
///
/// Every query change cancels the in-flight request before issuing the next
/// one, so only the most recently dispatched request can update the
/// view-model, whatever order responses arrive in.
#[derive(Debug)]
pub struct ListController<T> {
    query: ListQuery,
    view: ListViewModel<T>,
    requests: RequestSlot,
    torn_down: bool,
}

impl<T> ListController<T> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            view: ListViewModel::default(),
            requests: RequestSlot::new(),
            torn_down: false,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn view(&self) -> &ListViewModel<T> {
        &self.view
    }

    /// Cancels the in-flight request and dispatches `query`.
    /// Returns `None` once the controller is torn down.
    pub fn load(&mut self, query: ListQuery) -> Option<Dispatch> {
        if self.torn_down {
            return None;
        }
        let token = self.requests.issue();
        log::debug!(
            "list dispatch #{} page={} search={:?}",
            token.id(),
            query.page,
            query.search
        );
        self.query = query.clone();
        self.view.loading = true;
        self.view.error = None;
        Some(Dispatch { token, query })
    }

    pub fn reload(&mut self) -> Option<Dispatch> {
        let query = self.query.clone();
        self.load(query)
    }

    /// Requests page `page` (1-based). Pages below 1 or past the last known
    /// page are ignored.
    pub fn set_page(&mut self, page: u32) -> Option<Dispatch> {
        if page == 0 {
            return None;
        }
        let last_known = self.view.total_pages.max(1);
        if page > last_known {
            log::debug!("page {} ignored, last page is {}", page, last_known);
            return None;
        }
        let query = self.query.with_page(page);
        self.load(query)
    }

    /// New search term; always restarts from page 1.
    pub fn set_search(&mut self, search: impl Into<String>) -> Option<Dispatch> {
        let query = self.query.with_search(search);
        self.load(query)
    }

    pub fn set_sort(&mut self, field: impl Into<String>, order: SortOrder) -> Option<Dispatch> {
        let query = self.query.with_sort(field, order);
        self.load(query)
    }

    /// Same column flips the order; a new column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) -> Option<Dispatch> {
        let order = if self.query.sort_field() == field {
            self.query.sort_order_or_default().toggled()
        } else {
            SortOrder::Asc
        };
        self.set_sort(field, order)
    }

    pub fn set_limit(&mut self, limit: u32) -> Option<Dispatch> {
        let query = self.query.with_limit(limit);
        self.load(query)
    }

    /// Applies the outcome of a dispatched request. Returns `true` when the
    /// view-model changed.
    ///
    /// Outcomes of superseded or cancelled requests are dropped silently,
    /// whether they succeeded or failed.
    pub fn settle(&mut self, settled: Settled<T>) -> bool {
        let Settled { token, outcome } = settled;
        if self.torn_down || !self.requests.settle(&token) {
            log::debug!("list response #{} discarded", token.id());
            return false;
        }

        match outcome {
            Ok(result) => {
                self.view.items = result.items;
                self.view.page = result.page;
                self.view.total_pages = result.total_pages;
                self.view.total = result.total;
                self.view.loading = false;
                self.view.error = None;
                true
            }
            Err(FetchError::Cancelled) => false,
            Err(FetchError::Failed(message)) => {
                log::warn!("list request #{} failed: {}", token.id(), message);
                self.view.loading = false;
                self.view.error = Some(message);
                true
            }
        }
    }

    /// Cancels the in-flight request; nothing is applied afterwards.
    pub fn teardown(&mut self) {
        self.requests.cancel();
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Outcome = Result<ListResult<u32>, FetchError>;

    fn page(items: Vec<u32>, page: u32, total_pages: u32, total: u64) -> Outcome {
        Ok(ListResult {
            items,
            page,
            total_pages,
            total,
        })
    }

    /// Spawns `dispatch` on `pool` with a fetch that resolves when the returned
    /// sender fires.
    fn spawn_pending(
        pool: &LocalPool,
        controller: &Rc<RefCell<ListController<u32>>>,
        dispatch: Dispatch,
    ) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel::<Outcome>();
        let controller = Rc::clone(controller);
        pool.spawner()
            .spawn_local(async move {
                let settled = dispatch
                    .run(|_query, _token| async move { rx.await.unwrap_or(Err(FetchError::Cancelled)) })
                    .await;
                controller.borrow_mut().settle(settled);
            })
            .unwrap();
        tx
    }

    #[test]
    fn test_last_dispatched_wins_when_responses_arrive_out_of_order() {
        let mut pool = LocalPool::new();
        let controller = Rc::new(RefCell::new(ListController::new(ListQuery::new(10))));

        let first = controller.borrow_mut().set_search("a").unwrap();
        let second = controller.borrow_mut().set_search("ab").unwrap();
        let third = controller.borrow_mut().set_search("abc").unwrap();

        let tx1 = spawn_pending(&pool, &controller, first);
        let tx2 = spawn_pending(&pool, &controller, second);
        let tx3 = spawn_pending(&pool, &controller, third);
        pool.run_until_stalled();
        assert!(controller.borrow().view().loading);

        tx3.send(page(vec![3], 1, 1, 1)).unwrap();
        pool.run_until_stalled();
        tx1.send(page(vec![1, 1, 1], 1, 1, 3)).unwrap();
        tx2.send(page(vec![2, 2], 1, 1, 2)).unwrap();
        pool.run_until_stalled();

        let c = controller.borrow();
        assert_eq!(c.view().items, vec![3]);
        assert_eq!(c.view().total, 1);
        assert!(!c.view().loading);
        assert_eq!(c.query().search, "abc");
    }

    #[test]
    fn test_stale_response_before_latest_does_not_apply() {
        let mut pool = LocalPool::new();
        let controller = Rc::new(RefCell::new(ListController::new(ListQuery::new(10))));

        let first = controller.borrow_mut().load(ListQuery::new(10)).unwrap();
        let second = controller.borrow_mut().set_search("x").unwrap();
        let tx1 = spawn_pending(&pool, &controller, first);
        let tx2 = spawn_pending(&pool, &controller, second);

        tx1.send(page(vec![9, 9], 1, 1, 2)).unwrap();
        pool.run_until_stalled();
        {
            let c = controller.borrow();
            assert!(c.view().items.is_empty());
            assert!(c.view().loading);
        }

        tx2.send(page(vec![1], 1, 1, 1)).unwrap();
        pool.run_until_stalled();
        assert_eq!(controller.borrow().view().items, vec![1]);
    }

    #[test]
    fn test_cancelled_request_failure_is_silent() {
        let mut c = ListController::<u32>::new(ListQuery::new(10));
        let stale = c.load(ListQuery::new(10)).unwrap();
        let _fresh = c.set_page(1).unwrap();

        assert!(stale.token.is_cancelled());
        let before = c.view().clone();
        let changed = c.settle(Settled {
            token: stale.token,
            outcome: Err(FetchError::Failed("boom".to_string())),
        });

        assert!(!changed);
        assert_eq!(c.view(), &before);
        assert!(c.view().loading);
        assert_eq!(c.view().error, None);
    }

    #[test]
    fn test_failure_sets_error_and_clears_loading() {
        let mut c = ListController::<u32>::new(ListQuery::new(10));
        let d = c.reload().unwrap();
        assert!(c.settle(Settled {
            token: d.token,
            outcome: Err(FetchError::Failed("Failed to fetch banners".to_string())),
        }));

        assert!(!c.view().loading);
        assert_eq!(c.view().error.as_deref(), Some("Failed to fetch banners"));

        // The next load clears the error.
        c.reload().unwrap();
        assert_eq!(c.view().error, None);
        assert!(c.view().loading);
    }

    #[test]
    fn test_cancelled_outcome_of_live_token_changes_nothing() {
        let mut c = ListController::<u32>::new(ListQuery::new(10));
        let d = c.reload().unwrap();
        assert!(!c.settle(Settled {
            token: d.token,
            outcome: Err(FetchError::Cancelled),
        }));
        assert!(c.view().loading);
        assert_eq!(c.view().error, None);
    }

    #[test]
    fn test_empty_result_is_success() {
        let mut c = ListController::<u32>::new(ListQuery::new(10));
        let d = c.reload().unwrap();
        assert!(c.settle(Settled {
            token: d.token,
            outcome: page(vec![], 1, 0, 0),
        }));
        assert!(c.view().is_empty());
        assert_eq!(c.view().error, None);
    }

    #[test]
    fn test_set_search_resets_page() {
        let mut c = ListController::<u32>::new(ListQuery::new(10));
        let d = c.reload().unwrap();
        c.settle(Settled {
            token: d.token,
            outcome: page(vec![1], 1, 3, 25),
        });
        let d = c.set_page(3).unwrap();
        assert_eq!(d.query.page, 3);

        let d = c.set_search("x").unwrap();
        assert_eq!(d.query.page, 1);
        assert_eq!(c.query().page, 1);
    }

    #[test]
    fn test_page_beyond_last_is_ignored() {
        let mut c = ListController::<u32>::new(ListQuery::new(10));
        let d = c.reload().unwrap();
        c.settle(Settled {
            token: d.token,
            outcome: page((1..=10).collect(), 1, 3, 25),
        });
        assert_eq!(c.view().total_pages, 3);

        assert!(c.set_page(4).is_none());
        assert!(c.set_page(0).is_none());
        assert!(!c.view().loading);
        assert_eq!(c.query().page, 1);
        assert!(c.set_page(3).is_some());
    }

    #[test]
    fn test_toggle_sort() {
        let mut c = ListController::<u32>::new(ListQuery::new(10));
        let d = c.toggle_sort("title").unwrap();
        assert_eq!(d.query.sort_by.as_deref(), Some("title"));
        assert_eq!(d.query.sort_order, Some(SortOrder::Asc));

        let d = c.toggle_sort("title").unwrap();
        assert_eq!(d.query.sort_order, Some(SortOrder::Desc));

        let d = c.toggle_sort("position").unwrap();
        assert_eq!(d.query.sort_by.as_deref(), Some("position"));
        assert_eq!(d.query.sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn test_set_limit_resets_page() {
        let mut c = ListController::<u32>::new(ListQuery::new(10).with_page(2));
        let d = c.set_limit(50).unwrap();
        assert_eq!(d.query.limit, 50);
        assert_eq!(d.query.page, 1);
    }

    #[test]
    fn test_teardown_blocks_updates() {
        let mut pool = LocalPool::new();
        let controller = Rc::new(RefCell::new(ListController::new(ListQuery::new(10))));
        let d = controller.borrow_mut().reload().unwrap();
        let token = d.token.clone();
        let tx = spawn_pending(&pool, &controller, d);

        controller.borrow_mut().teardown();
        assert!(token.is_cancelled());

        tx.send(page(vec![1], 1, 1, 1)).unwrap();
        pool.run_until_stalled();

        let mut c = controller.borrow_mut();
        assert!(c.view().items.is_empty());
        assert!(c.load(ListQuery::new(10)).is_none());
        assert!(c.set_search("x").is_none());
    }
}
