//! People search, with shortcuts to view a profile or start a chat.

use api::models::User;
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_toasts, Avatar, ToastLevel};

use crate::Route;

use super::Shell;

#[component]
pub fn Search() -> Element {
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<User>::new);
    let mut searched = use_signal(|| false);

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let q = query().trim().to_string();
        if q.is_empty() {
            return;
        }
        spawn(async move {
            let client = make_client();
            match client.search_users(&q).await {
                Ok(users) => {
                    results.set(users);
                    searched.set(true);
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    let mut start_chat = move |user_id: String| {
        spawn(async move {
            let client = make_client();
            match client.open_conversation(&user_id).await {
                Ok(_) => {
                    nav.push(Route::Messages {});
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Shell {
            div { class: "search",
                h2 { "Find people" }

                form { class: "search-form", onsubmit: handle_search,
                    input {
                        r#type: "search",
                        placeholder: "Search by name or email...",
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                    }
                    button { class: "button button--primary", r#type: "submit", "Search" }
                }

                if searched() && results().is_empty() {
                    div { class: "placeholder", "No one matched that search." }
                }

                for user in results().iter() {
                    {
                        let user_id = user.id.clone();
                        let chat_id = user.id.clone();
                        rsx! {
                            div { key: "{user_id}", class: "search-result card",
                                Avatar { user: user.clone(), size: 40 }
                                div { class: "search-result-info",
                                    span { class: "search-result-name", "{user.name}" }
                                    span { class: "search-result-email", "{user.email}" }
                                }
                                div { class: "search-result-actions",
                                    Link {
                                        to: Route::Profile { user_id: user_id.clone() },
                                        class: "button button--ghost",
                                        "View profile"
                                    }
                                    button {
                                        class: "button button--primary",
                                        onclick: move |_| start_chat(chat_id.clone()),
                                        "Message"
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
