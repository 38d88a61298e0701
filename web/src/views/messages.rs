//! Direct messages: conversation list and message thread.

use api::models::{Conversation, Message};
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_session, use_toasts, ToastLevel};

use super::Shell;

#[component]
pub fn Messages() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let mut conversations = use_signal(Vec::<Conversation>::new);
    let mut selected = use_signal(|| Option::<String>::None);
    let mut thread = use_signal(Vec::<Message>::new);
    let mut draft = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.conversations().await {
            Ok(loaded) => conversations.set(loaded),
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
    });

    let mut open = move |conversation_id: String| {
        selected.set(Some(conversation_id.clone()));
        thread.set(Vec::new());
        spawn(async move {
            let client = make_client();
            match client.messages(&conversation_id).await {
                Ok(loaded) => thread.set(loaded),
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(conversation_id) = selected() else {
            return;
        };
        let content = draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        spawn(async move {
            let client = make_client();
            match client.send_message(&conversation_id, &content).await {
                Ok(()) => {
                    draft.set(String::new());
                    if let Ok(loaded) = client.messages(&conversation_id).await {
                        thread.set(loaded);
                    }
                    if let Ok(loaded) = client.conversations().await {
                        conversations.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    let me = session.current_user().map(|u| u.id).unwrap_or_default();

    rsx! {
        Shell {
            div { class: "messages",
                aside { class: "conversation-list card",
                    h3 { "Chats" }
                    if conversations().is_empty() {
                        div { class: "placeholder",
                            "No conversations yet. Find people via search to start one."
                        }
                    }
                    for conversation in conversations().iter() {
                        {
                            let conversation_id = conversation.id.clone();
                            let active = selected() == Some(conversation_id.clone());
                            let title = conversation.title(&me);
                            let preview = conversation
                                .last_message
                                .as_ref()
                                .map(|m| m.content.clone())
                                .unwrap_or_else(|| "No messages yet".to_string());
                            rsx! {
                                button {
                                    key: "{conversation_id}",
                                    class: if active { "conversation conversation--active" } else { "conversation" },
                                    onclick: move |_| open(conversation_id.clone()),
                                    span { class: "conversation-title", "{title}" }
                                    span { class: "conversation-preview", "{preview}" }
                                }
                            }
                        }
                    }
                }

                section { class: "thread card",
                    if selected().is_none() {
                        div { class: "placeholder", "Select a conversation" }
                    } else {
                        div { class: "thread-messages",
                            for message in thread().iter() {
                                div {
                                    key: "{message.id}",
                                    class: if message.sender_id == me { "message message--own" } else { "message" },
                                    span { class: "message-body", "{message.content}" }
                                    span { class: "message-time", "{message.created_at}" }
                                }
                            }
                        }

                        form { class: "thread-compose", onsubmit: handle_send,
                            input {
                                r#type: "text",
                                placeholder: "Type a message...",
                                value: draft(),
                                oninput: move |evt| draft.set(evt.value()),
                            }
                            button { class: "button button--primary", r#type: "submit", "Send" }
                        }
                    }
                }
            }
        }
    }
}
