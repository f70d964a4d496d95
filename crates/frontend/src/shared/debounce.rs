//! Debounce: propagate a value only after it stopped changing for `delay_ms`.
//!
//! [`Debouncer`] is a clock-driven state machine; [`use_debounced`] wires it to
//! a `gloo-timers` timeout inside a Leptos owner and tears it down with the
//! owner.
//!
//! Every new input restarts the timer, even when it equals the pending or the
//! last emitted value. An emission equal to the last emitted value is
//! suppressed, so typing `a`, `ab`, `a` inside one window produces no change.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Identifies one scheduled emission. A newer `push` makes older tickets stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Result of checking a ticket against the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settle<T> {
    /// The input was stable long enough; propagate this value.
    Emit(T),
    /// Still inside the quiet window; check again after this many ms.
    Wait(u64),
    /// Superseded, cancelled, torn down, or equal to the last emitted value.
    Drop,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due_at: u64,
    ticket: Ticket,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    current: T,
    pending: Option<Pending<T>>,
    next_ticket: u64,
    torn_down: bool,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(initial: T, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            current: initial,
            pending: None,
            next_ticket: 0,
            torn_down: false,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Last emitted value (or the initial one).
    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces any pending emission with `value`, due at `now_ms + delay`.
    /// Returns `None` after teardown.
    pub fn push(&mut self, value: T, now_ms: u64) -> Option<Ticket> {
        if self.torn_down {
            return None;
        }
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some(Pending {
            value,
            due_at: now_ms.saturating_add(self.delay_ms),
            ticket,
        });
        Some(ticket)
    }

    /// Checks whether the emission scheduled under `ticket` is due at `now_ms`.
    pub fn settle(&mut self, ticket: Ticket, now_ms: u64) -> Settle<T> {
        let Some(pending) = self.pending.as_ref() else {
            return Settle::Drop;
        };
        if self.torn_down || pending.ticket != ticket {
            return Settle::Drop;
        }
        if now_ms < pending.due_at {
            return Settle::Wait(pending.due_at - now_ms);
        }

        let Some(pending) = self.pending.take() else {
            return Settle::Drop;
        };
        if pending.value == self.current {
            return Settle::Drop;
        }
        self.current = pending.value.clone();
        Settle::Emit(pending.value)
    }

    /// Clock-driven variant of [`settle`](Self::settle) for whatever is pending.
    pub fn poll(&mut self, now_ms: u64) -> Settle<T> {
        match self.pending.as_ref().map(|p| p.ticket) {
            Some(ticket) => self.settle(ticket, now_ms),
            None => Settle::Drop,
        }
    }

    /// Discards the pending emission without emitting.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Emits `value` right away, discarding anything pending. Used by
    /// "clear search" buttons that must not wait for the quiet window.
    pub fn flush(&mut self, value: T) -> Option<T> {
        if self.torn_down {
            return None;
        }
        self.pending = None;
        if value == self.current {
            return None;
        }
        self.current = value.clone();
        Some(value)
    }

    /// No emission can happen after this.
    pub fn teardown(&mut self) {
        self.pending = None;
        self.torn_down = true;
    }
}

pub fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Debounced input bound to the current reactive owner.
#[derive(Clone, Copy)]
pub struct DebouncedInput {
    debouncer: StoredValue<Debouncer<String>, LocalStorage>,
    on_emit: Callback<String>,
}

impl DebouncedInput {
    /// Schedules `value` for emission after the quiet window.
    pub fn push(&self, value: String) {
        let Some(Some(ticket)) = self
            .debouncer
            .try_update_value(|d| d.push(value, now_ms()))
        else {
            return;
        };
        let Some(delay) = self.debouncer.try_with_value(|d| d.delay_ms()) else {
            return;
        };

        let debouncer = self.debouncer;
        let on_emit = self.on_emit;
        spawn_local(async move {
            let mut wait = delay;
            loop {
                TimeoutFuture::new(u32::try_from(wait).unwrap_or(u32::MAX)).await;
                // The owner may be gone by now; a disposed value reads as `Drop`.
                let settled = debouncer
                    .try_update_value(|d| d.settle(ticket, now_ms()))
                    .unwrap_or(Settle::Drop);
                match settled {
                    Settle::Emit(value) => {
                        on_emit.run(value);
                        break;
                    }
                    Settle::Wait(remaining) => wait = remaining.max(1),
                    Settle::Drop => break,
                }
            }
        });
    }

    /// Emits `value` immediately.
    pub fn flush(&self, value: String) {
        if let Some(Some(value)) = self.debouncer.try_update_value(|d| d.flush(value)) {
            self.on_emit.run(value);
        }
    }
}

/// Creates a debounced string input owned by the current component. Pending
/// emissions are dropped when the component is cleaned up.
pub fn use_debounced(initial: String, delay_ms: u64, on_emit: Callback<String>) -> DebouncedInput {
    let debouncer = StoredValue::new_local(Debouncer::new(initial, delay_ms));

    on_cleanup(move || {
        debouncer.try_update_value(|d| d.teardown());
    });

    DebouncedInput { debouncer, on_emit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_emits_only_last_value() {
        let mut d = Debouncer::new(String::new(), 500);
        let a = d.push("a".to_string(), 0).unwrap();
        let b = d.push("b".to_string(), 100).unwrap();

        // The timer of `a` fires at 500 but `a` was superseded.
        assert_eq!(d.settle(a, 500), Settle::Drop);
        assert_eq!(d.current(), "");
        assert_eq!(d.settle(b, 500), Settle::Wait(100));
        assert_eq!(d.settle(b, 600), Settle::Emit("b".to_string()));
        assert_eq!(d.current(), "b");
        assert!(!d.is_pending());
    }

    #[test]
    fn test_poll_never_passes_through_intermediate_value() {
        let mut d = Debouncer::new(String::new(), 500);
        d.push("a".to_string(), 0);
        d.push("b".to_string(), 100);

        let mut emitted = Vec::new();
        for t in (0..=1000).step_by(50) {
            if let Settle::Emit(v) = d.poll(t) {
                emitted.push((t, v));
            }
        }
        assert_eq!(emitted, vec![(600, "b".to_string())]);
    }

    #[test]
    fn test_returning_to_current_value_is_suppressed() {
        let mut d = Debouncer::new("a".to_string(), 300);
        d.push("ab".to_string(), 0);
        let t = d.push("a".to_string(), 100).unwrap();

        assert_eq!(d.settle(t, 400), Settle::Drop);
        assert_eq!(d.current(), "a");
    }

    #[test]
    fn test_teardown_discards_pending() {
        let mut d = Debouncer::new(0, 100);
        let t = d.push(1, 0).unwrap();
        d.teardown();

        assert_eq!(d.settle(t, 1_000), Settle::Drop);
        assert_eq!(d.push(2, 1_000), None);
        assert_eq!(d.flush(3), None);
        assert_eq!(*d.current(), 0);
    }

    #[test]
    fn test_cancel_and_flush() {
        let mut d = Debouncer::new("x".to_string(), 100);
        let t = d.push("xy".to_string(), 0).unwrap();
        d.cancel();
        assert_eq!(d.settle(t, 200), Settle::Drop);

        d.push("xyz".to_string(), 0);
        assert_eq!(d.flush(String::new()), Some(String::new()));
        assert!(!d.is_pending());
        assert_eq!(d.flush(String::new()), None);
    }
}
