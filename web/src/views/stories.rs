//! Stories: active 24-hour stories grouped per author, with a simple viewer.

use api::models::StoryGroup;
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_toasts, Avatar, ToastLevel};

use super::Shell;

#[component]
pub fn Stories() -> Element {
    let mut toasts = use_toasts();

    let mut groups = use_signal(Vec::<StoryGroup>::new);
    let mut loading = use_signal(|| true);
    // Index of the group open in the viewer, if any.
    let mut viewing = use_signal(|| Option::<usize>::None);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.stories().await {
            Ok(loaded) => groups.set(loaded),
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    rsx! {
        Shell {
            div { class: "stories",
                h2 { "Stories" }

                if loading() {
                    div { class: "placeholder", "Loading stories..." }
                } else if groups().is_empty() {
                    div { class: "placeholder", "No active stories right now." }
                }

                div { class: "story-rail",
                    for (index, group) in groups().iter().enumerate() {
                        {
                            let author = group.user.clone();
                            rsx! {
                                button {
                                    key: "{index}",
                                    class: "story-tile",
                                    onclick: move |_| viewing.set(Some(index)),
                                    if let Some(author) = &author {
                                        Avatar { user: author.clone(), size: 56 }
                                        span { class: "story-author", "{author.name}" }
                                    }
                                }
                            }
                        }
                    }
                }

                if let Some(index) = viewing() {
                    if let Some(group) = groups().get(index) {
                        div { class: "story-viewer", onclick: move |_| viewing.set(None),
                            div { class: "story-viewer-inner",
                                if let Some(author) = &group.user {
                                    div { class: "story-viewer-header",
                                        Avatar { user: author.clone(), size: 32 }
                                        span { "{author.name}" }
                                    }
                                }
                                for story in group.stories.iter() {
                                    if story.media_type == "video" {
                                        video {
                                            key: "{story.id}",
                                            class: "story-media",
                                            src: "{story.media_url}",
                                            controls: true,
                                        }
                                    } else {
                                        img {
                                            key: "{story.id}",
                                            class: "story-media",
                                            src: "{story.media_url}",
                                        }
                                    }
                                }
                                button { class: "button button--ghost", "Close" }
                            }
                        }
                    }
                }
            }
        }
    }
}
