//! Leptos Toast Utilities
//!
//! Self-dismissing notifications for Leptos.
//! The stack is bounded: pushing past capacity evicts the oldest toast.

use std::collections::VecDeque;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Severity of a toast, also used as its CSS class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
    /// Fading out, removed after the fade delay
    pub leaving: bool,
}

/// Bounded FIFO of visible toasts
#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    capacity: usize,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Push a toast, returning its id and the toast evicted to make room (if any)
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) -> (u64, Option<Toast>) {
        let evicted = if self.toasts.len() >= self.capacity {
            self.toasts.pop_front()
        } else {
            None
        };

        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push_back(Toast {
            id,
            message: message.into(),
            level,
            leaving: false,
        });
        (id, evicted)
    }

    pub fn mark_leaving(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> Option<Toast> {
        let pos = self.toasts.iter().position(|t| t.id == id)?;
        self.toasts.remove(pos)
    }

    pub fn is_leaving(&self, id: u64) -> bool {
        self.toasts.iter().any(|t| t.id == id && t.leaving)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ToastConfig {
    pub capacity: usize,
    /// Time a toast stays fully visible
    pub ttl_ms: u32,
    /// Fade-out delay before removal
    pub fade_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            ttl_ms: 4000,
            fade_ms: 300,
        }
    }
}

/// Toast handle provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    config: ToastConfig,
}

impl Toasts {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(config.capacity)),
            config,
        }
    }

    /// Show a toast and schedule its dismissal
    pub fn notify(&self, message: impl Into<String>, level: ToastLevel) -> u64 {
        let message = message.into();
        let Some((id, _evicted)) = self.queue.try_update(|q| q.push(message, level)) else {
            return 0;
        };

        let queue = self.queue;
        let fade_ms = self.config.fade_ms;
        Timeout::new(self.config.ttl_ms, move || {
            queue.update(|q| {
                q.mark_leaving(id);
            });
            Timeout::new(fade_ms, move || {
                queue.update(|q| {
                    q.remove(id);
                });
            })
            .forget();
        })
        .forget();

        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(message, ToastLevel::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, ToastLevel::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(message, ToastLevel::Error)
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.remove(id);
        });
    }

    fn is_leaving(&self, id: u64) -> bool {
        self.queue.with(|q| q.is_leaving(id))
    }

    fn snapshot(&self) -> Vec<Toast> {
        self.queue.with(|q| q.iter().cloned().collect())
    }
}

/// Create the toast handle and provide it to all children
pub fn provide_toasts(config: ToastConfig) -> Toasts {
    let toasts = Toasts::new(config);
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the toast stack. Click a toast to dismiss it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="notification-host">
            <For
                each=move || toasts.snapshot()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("notification {}", toast.level.as_str());
                    view! {
                        <div
                            class=class
                            class:leaving=move || toasts.is_leaving(id)
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new(3);
        let (a, _) = queue.push("a", ToastLevel::Info);
        let (b, _) = queue.push("b", ToastLevel::Error);
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut queue = ToastQueue::new(2);
        queue.push("first", ToastLevel::Info);
        queue.push("second", ToastLevel::Info);
        let (_, evicted) = queue.push("third", ToastLevel::Success);

        assert_eq!(evicted.map(|t| t.message), Some("first".to_string()));
        assert_eq!(queue.len(), 2);
        let messages: Vec<_> = queue.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "third"]);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut queue = ToastQueue::new(5);
        for i in 0..50 {
            queue.push(format!("toast {}", i), ToastLevel::Info);
            assert!(queue.len() <= queue.capacity());
        }
        assert_eq!(queue.iter().next().map(|t| t.message.clone()), Some("toast 45".to_string()));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut queue = ToastQueue::new(0);
        queue.push("only", ToastLevel::Info);
        assert_eq!(queue.capacity(), 1);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_leaving_then_remove() {
        let mut queue = ToastQueue::new(3);
        let (id, _) = queue.push("bye", ToastLevel::Info);
        assert!(!queue.is_leaving(id));
        assert!(queue.mark_leaving(id));
        assert!(queue.is_leaving(id));
        assert!(queue.remove(id).is_some());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_remove_after_eviction_is_noop() {
        let mut queue = ToastQueue::new(1);
        let (old, _) = queue.push("old", ToastLevel::Info);
        queue.push("new", ToastLevel::Info);
        assert!(!queue.mark_leaving(old));
        assert!(queue.remove(old).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_level_classes() {
        assert_eq!(ToastLevel::Info.as_str(), "info");
        assert_eq!(ToastLevel::Success.as_str(), "success");
        assert_eq!(ToastLevel::Error.as_str(), "error");
    }
}
