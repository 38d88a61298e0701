//! Notifications list with read-state tracking.

use api::models::Notification;
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_toasts, ToastLevel};

use super::Shell;

#[component]
pub fn Notifications() -> Element {
    let mut toasts = use_toasts();

    let mut notifications = use_signal(Vec::<Notification>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.notifications().await {
            Ok(loaded) => notifications.set(loaded),
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    let mut mark_read = move |notification_id: String| {
        spawn(async move {
            let client = make_client();
            match client.mark_notification_read(&notification_id).await {
                Ok(()) => {
                    if let Ok(loaded) = client.notifications().await {
                        notifications.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Shell {
            div { class: "notifications",
                h2 { "Notifications" }

                if loading() {
                    div { class: "placeholder", "Loading notifications..." }
                } else if notifications().is_empty() {
                    div { class: "placeholder", "You're all caught up." }
                }

                for notification in notifications().iter() {
                    {
                        let id = notification.id.clone();
                        let read = notification.read;
                        rsx! {
                            div {
                                key: "{id}",
                                class: if read { "notification card" } else { "notification notification--unread card" },
                                div { class: "notification-body",
                                    span { class: "notification-kind", "{notification.kind}" }
                                    p { "{notification.content}" }
                                    span { class: "notification-time", "{notification.created_at}" }
                                }
                                if !read {
                                    button {
                                        class: "button button--ghost",
                                        onclick: move |_| mark_read(id.clone()),
                                        "Mark read"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
