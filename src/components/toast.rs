use crate::config::SiteConfig;
use dioxus::prelude::*;

const MAX_VISIBLE_TOASTS: usize = 3;

#[cfg(not(target_arch = "wasm32"))]
async fn toast_delay_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
async fn toast_delay_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Visible notifications, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Anything that can surface a short notice to the user.
pub trait Notify {
    fn notify(&mut self, message: &str);
}

impl Notify for ToastQueue {
    fn notify(&mut self, message: &str) {
        self.push(message);
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
    duration_ms: u64,
}

impl Toasts {
    pub fn new(queue: Signal<ToastQueue>, duration_ms: u64) -> Self {
        Self { queue, duration_ms }
    }

    pub fn show(&mut self, message: impl Into<String>) {
        let id = self.queue.with_mut(|queue| queue.push(message));
        let mut queue = self.queue;
        let duration_ms = self.duration_ms;
        spawn(async move {
            toast_delay_ms(duration_ms).await;
            queue.with_mut(|queue| queue.dismiss(id));
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.with_mut(|queue| queue.dismiss(id));
    }

    pub fn current(&self) -> ToastQueue {
        (self.queue)()
    }
}

impl Notify for Toasts {
    fn notify(&mut self, message: &str) {
        self.show(message);
    }
}

/// Registers a `Toasts` controller for the subtree.
pub fn use_toast_provider() -> Toasts {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toasts::new(queue, config.toast_duration_ms))
}

#[component]
pub fn ToastHost() -> Element {
    let Some(mut toasts) = try_use_context::<Toasts>() else {
        return rsx! {};
    };
    let queue = toasts.current();

    rsx! {
        div {
            class: "fixed bottom-6 right-6 z-50 flex flex-col gap-2 pointer-events-none",
            role: "status",
            aria_live: "polite",
            for toast in queue.items().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "toast pointer-events-auto bg-zinc-900/90 border border-white/10 text-white text-sm px-4 py-3 rounded-lg shadow-xl backdrop-blur-md",
                    onclick: move |_| toasts.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.push("Added to favorites");
        let second = queue.push("Removed from favorites");
        assert!(second > first);
        let messages: Vec<_> = queue.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["Added to favorites", "Removed from favorites"]);
    }

    #[test]
    fn oldest_toasts_are_dropped_past_the_cap() {
        let mut queue = ToastQueue::default();
        for n in 0..5 {
            queue.push(format!("toast {n}"));
        }
        let messages: Vec<_> = queue.items().iter().map(|t| t.message.clone()).collect();
        assert_eq!(messages, ["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let keep = queue.push("Link copied to clipboard");
        let gone = queue.push("Added to favorites");
        queue.dismiss(gone);
        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, keep);
    }
}
