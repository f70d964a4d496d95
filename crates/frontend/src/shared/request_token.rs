//! Single-flight request tokens.
//!
//! A [`RequestSlot`] hands out at most one live [`RequestToken`]. Issuing a new
//! token cancels the previous one, so a response that arrives for a superseded
//! request can be recognised and dropped without touching state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::{AbortController, AbortSignal};

struct TokenInner {
    id: u64,
    cancelled: Cell<bool>,
    abort: RefCell<Option<AbortController>>,
}

/// Handle for one in-flight request. Clones share the same cancellation flag.
#[derive(Clone)]
pub struct RequestToken {
    inner: Rc<TokenInner>,
}

impl RequestToken {
    fn new(id: u64) -> Self {
        Self {
            inner: Rc::new(TokenInner {
                id,
                cancelled: Cell::new(false),
                abort: RefCell::new(None),
            }),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Marks the token cancelled and aborts the attached HTTP request, if any.
    /// Idempotent.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        if let Some(controller) = self.inner.abort.borrow_mut().take() {
            controller.abort();
        }
    }

    /// Browser abort signal tied to this token, created on first use.
    ///
    /// Only meaningful inside the browser; returns `None` when the token is
    /// already cancelled or no `AbortController` can be created.
    pub fn abort_signal(&self) -> Option<AbortSignal> {
        if self.is_cancelled() {
            return None;
        }
        let mut slot = self.inner.abort.borrow_mut();
        if slot.is_none() {
            *slot = AbortController::new().ok();
        }
        slot.as_ref().map(AbortController::signal)
    }

    pub fn same_as(&self, other: &RequestToken) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestToken")
            .field("id", &self.inner.id)
            .field("cancelled", &self.inner.cancelled.get())
            .finish()
    }
}

/// Owner of the single live token of one controller.
#[derive(Debug, Default)]
pub struct RequestSlot {
    next_id: u64,
    live: Option<RequestToken>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the live token (if any) and issues a new one.
    pub fn issue(&mut self) -> RequestToken {
        self.cancel();
        self.next_id += 1;
        let token = RequestToken::new(self.next_id);
        self.live = Some(token.clone());
        token
    }

    pub fn is_live(&self, token: &RequestToken) -> bool {
        !token.is_cancelled()
            && self
                .live
                .as_ref()
                .is_some_and(|live| live.same_as(token))
    }

    /// Retires `token` once its request completed. Returns `false` when the
    /// token was superseded or cancelled, in which case the outcome must be
    /// discarded.
    pub fn settle(&mut self, token: &RequestToken) -> bool {
        if !self.is_live(token) {
            return false;
        }
        self.live = None;
        true
    }

    pub fn has_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(previous) = self.live.take() {
            previous.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_cancels_previous() {
        let mut slot = RequestSlot::new();
        let first = slot.issue();
        let second = slot.issue();

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(!slot.is_live(&first));
        assert!(slot.is_live(&second));
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_settle_only_once() {
        let mut slot = RequestSlot::new();
        let token = slot.issue();

        assert!(slot.settle(&token));
        assert!(!slot.has_live());
        assert!(!slot.settle(&token));
    }

    #[test]
    fn test_superseded_token_cannot_settle() {
        let mut slot = RequestSlot::new();
        let stale = slot.issue();
        let fresh = slot.issue();

        assert!(!slot.settle(&stale));
        assert!(slot.settle(&fresh));
    }

    #[test]
    fn test_cancel_clears_live_token() {
        let mut slot = RequestSlot::new();
        let token = slot.issue();
        slot.cancel();

        assert!(token.is_cancelled());
        assert!(!slot.has_live());
        assert!(!slot.settle(&token));
    }

    #[test]
    fn test_clones_share_cancellation() {
        let mut slot = RequestSlot::new();
        let token = slot.issue();
        let clone = token.clone();
        token.cancel();
        token.cancel();

        assert!(clone.is_cancelled());
        assert!(clone.same_as(&token));
    }
}
