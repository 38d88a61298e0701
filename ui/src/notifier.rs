//! Realtime notifier wiring — one WebSocket per authenticated session.
//!
//! The connection lifecycle lives in [`api::push::ConnState`]; this module
//! owns the actual browser socket and feeds incoming frames through
//! [`api::push::parse_alert`] into the toast stack. Best-effort only: a
//! dropped connection stays dropped until the next session bootstrap, and
//! the message/notification screens re-fetch their own lists regardless.

use api::push::ConnState;
use dioxus::prelude::*;

use crate::toast::ToastStack;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static SOCKET: std::cell::RefCell<Option<web_sys::WebSocket>> =
        const { std::cell::RefCell::new(None) };
}

/// Connection state of the push channel, provided by `SessionProvider`.
pub fn use_notifier() -> Signal<ConnState> {
    use_context::<Signal<ConnState>>()
}

/// Open the push channel for `user_id`. Any previous socket is closed first;
/// there is never more than one connection per process.
#[allow(unused_variables, unused_mut)]
pub fn open_notifier(user_id: &str, mut conn: Signal<ConnState>, mut toasts: Signal<ToastStack>) {
    close_notifier(conn);

    #[cfg(target_arch = "wasm32")]
    {
        use api::push::{ConnEvent, PushAlert};
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        use crate::toast::{push_toast, ToastLevel};

        let url = api::ApiConfig::resolve().push_url(user_id);
        conn.set(conn.peek().transition(ConnEvent::Dial));

        let ws = match web_sys::WebSocket::new(&url) {
            Ok(ws) => ws,
            Err(err) => {
                tracing::error!("failed to open push channel: {err:?}");
                conn.set(ConnState::Closed);
                return;
            }
        };

        let onopen = Closure::<dyn FnMut()>::new(move || {
            tracing::info!("push channel open");
            conn.set(conn.peek().transition(ConnEvent::Opened));
        });
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let onmessage = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
            move |event: web_sys::MessageEvent| {
                let Some(text) = event.data().as_string() else {
                    return;
                };
                match api::push::parse_alert(&text) {
                    Some(PushAlert::Notification(content)) => {
                        push_toast(&mut toasts, ToastLevel::Info, &content);
                    }
                    Some(PushAlert::NewMessage) => {
                        push_toast(&mut toasts, ToastLevel::Info, "New message received");
                    }
                    None => {}
                }
            },
        );
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        let onclose = Closure::<dyn FnMut(web_sys::CloseEvent)>::new(
            move |_event: web_sys::CloseEvent| {
                tracing::info!("push channel closed");
                conn.set(conn.peek().transition(ConnEvent::Closed));
            },
        );
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();

        SOCKET.with(|slot| *slot.borrow_mut() = Some(ws));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(user = user_id, "push channel only available on the web platform");
    }
}

/// Close the push channel, if open. Safe to call repeatedly.
#[allow(unused_mut)]
pub fn close_notifier(mut conn: Signal<ConnState>) {
    #[cfg(target_arch = "wasm32")]
    SOCKET.with(|slot| {
        if let Some(ws) = slot.borrow_mut().take() {
            // Detach handlers so the close below doesn't fire our own
            // onclose against a signal we're about to overwrite.
            ws.set_onopen(None);
            ws.set_onmessage(None);
            ws.set_onclose(None);
            let _ = ws.close();
        }
    });

    if *conn.peek() != ConnState::Closed {
        conn.set(ConnState::Closed);
    }
}
