use std::time::Duration;

use leptos::prelude::*;
use thaw::{Toast, ToastIntent, ToastOptions, ToastStatus, ToastTitle, ToasterInjection};
use uuid::Uuid;

use super::config::{TOAST_LIMIT, TOAST_TTL_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn intent(&self) -> ToastIntent {
        match self {
            ToastKind::Success => ToastIntent::Success,
            ToastKind::Error => ToastIntent::Error,
            ToastKind::Info => ToastIntent::Info,
        }
    }
}

/// Ids of the toasts currently on screen, oldest first. Bounded: pushing past
/// the limit evicts from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    limit: usize,
    live: Vec<Uuid>,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            live: Vec::new(),
        }
    }

    /// Registers `id` and returns the ids that no longer fit.
    pub fn push(&mut self, id: Uuid) -> Vec<Uuid> {
        self.live.push(id);
        let overflow = self.live.len().saturating_sub(self.limit);
        self.live.drain(..overflow).collect()
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.live.retain(|live| *live != id);
    }

    pub fn live(&self) -> &[Uuid] {
        &self.live
    }
}

/// Toast notifications on top of the thaw toaster; provided via context.
#[derive(Clone, Copy)]
pub struct ToastService {
    toaster: ToasterInjection,
    queue: StoredValue<ToastQueue>,
}

impl ToastService {
    /// Must be created below `ToasterProvider`.
    pub fn new() -> Self {
        Self {
            toaster: ToasterInjection::expect_context(),
            queue: StoredValue::new(ToastQueue::new(TOAST_LIMIT)),
        }
    }

    pub fn show(&self, kind: ToastKind, text: impl Into<String>) {
        let id = Uuid::new_v4();
        let Some(evicted) = self.queue.try_update_value(|q| q.push(id)) else {
            return;
        };
        for old in evicted {
            self.toaster.dismiss_toast(old);
        }

        let text = text.into();
        let queue = self.queue;
        let options = ToastOptions::default()
            .with_id(id)
            .with_intent(kind.intent())
            .with_timeout(Duration::from_millis(u64::from(TOAST_TTL_MS)))
            .with_on_status_change(move |status| {
                if status == ToastStatus::Unmounted {
                    queue.try_update_value(|q| q.dismiss(id));
                }
            });
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{text}</ToastTitle>
                    </Toast>
                }
            },
            options,
        );
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded() {
        let mut q = ToastQueue::new(2);
        let one = Uuid::new_v4();
        let two = Uuid::new_v4();
        let three = Uuid::new_v4();

        assert!(q.push(one).is_empty());
        assert!(q.push(two).is_empty());
        assert_eq!(q.push(three), vec![one]);
        assert_eq!(q.live(), &[two, three]);
    }

    #[test]
    fn test_dismiss() {
        let mut q = ToastQueue::new(3);
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        q.push(a);
        q.push(b);
        q.dismiss(a);
        q.dismiss(Uuid::new_v4());

        assert_eq!(q.live(), &[b]);
    }

    #[test]
    fn test_intent_mapping() {
        assert!(matches!(ToastKind::Success.intent(), ToastIntent::Success));
        assert!(matches!(ToastKind::Error.intent(), ToastIntent::Error));
        assert!(matches!(ToastKind::Info.intent(), ToastIntent::Info));
    }
}
