//! Transient user-visible alerts.
//!
//! Screens (and the realtime notifier) push short messages here; the
//! [`Toaster`] renders them stacked in a corner and drops each one after a
//! few seconds. Failures never change screen state beyond a toast.

use dioxus::prelude::*;

const TOAST_LIFETIME_MS: f64 = 4000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    created_ms: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    entries: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn push(&mut self, level: ToastLevel, message: &str) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
            created_ms: now_ms(),
        });
    }

    fn has_expired(&self, now: f64) -> bool {
        self.entries
            .iter()
            .any(|t| now - t.created_ms > TOAST_LIFETIME_MS)
    }

    fn prune(&mut self, now: f64) {
        self.entries
            .retain(|t| now - t.created_ms <= TOAST_LIFETIME_MS);
    }
}

/// The toast stack for the running app.
pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

pub fn push_toast(toasts: &mut Signal<ToastStack>, level: ToastLevel, message: &str) {
    toasts.write().push(level, message);
}

/// Provider component that owns the toast stack and renders it.
/// Wrap the app with this once; screens reach the stack via [`use_toasts`].
#[component]
pub fn Toaster(children: Element) -> Element {
    let mut toasts = use_signal(ToastStack::default);
    use_context_provider(|| toasts);

    // Drop expired toasts once a second.
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;

                let now = now_ms();
                if toasts.peek().has_expired(now) {
                    toasts.write().prune(now);
                }
            }
        });
    });

    rsx! {
        {children}

        div {
            class: "toast-stack",
            for toast in toasts().entries().iter() {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    "{toast.message}"
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut stack = ToastStack::default();
        stack.push(ToastLevel::Info, "first");
        stack.push(ToastLevel::Error, "second");
        assert_eq!(stack.entries().len(), 2);
        assert!(stack.entries()[0].id < stack.entries()[1].id);
    }

    #[test]
    fn test_prune_drops_only_expired_toasts() {
        let mut stack = ToastStack::default();
        stack.push(ToastLevel::Info, "old");
        stack.entries[0].created_ms = 0.0;
        stack.push(ToastLevel::Info, "fresh");

        let now = now_ms();
        assert!(stack.has_expired(now));
        stack.prune(now);
        assert_eq!(stack.entries().len(), 1);
        assert_eq!(stack.entries()[0].message, "fresh");
    }
}
