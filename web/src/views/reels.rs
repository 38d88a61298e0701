//! Reels: vertical list of video posts.

use api::models::FeedPost;
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_toasts, Avatar, ToastLevel};

use super::Shell;

#[component]
pub fn Reels() -> Element {
    let mut toasts = use_toasts();

    let mut reels = use_signal(Vec::<FeedPost>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.reels().await {
            Ok(loaded) => reels.set(loaded),
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    let mut toggle_like = move |post_id: String, liked: bool| {
        spawn(async move {
            let client = make_client();
            let result = if liked {
                client.unreact(&post_id).await
            } else {
                client.react(&post_id, "like").await
            };
            match result {
                Ok(()) => {
                    if let Ok(loaded) = client.reels().await {
                        reels.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Shell {
            div { class: "reels",
                h2 { "Reels" }

                if loading() {
                    div { class: "placeholder", "Loading reels..." }
                } else if reels().is_empty() {
                    div { class: "placeholder", "No reels yet." }
                }

                for reel in reels().iter() {
                    div { key: "{reel.id}", class: "reel card",
                        div { class: "reel-header",
                            if let Some(author) = &reel.user {
                                Avatar { user: author.clone(), size: 36 }
                                span { class: "reel-author", "{author.name}" }
                            }
                        }

                        for url in reel.media_urls.iter() {
                            video { class: "reel-media", src: "{url}", controls: true }
                        }

                        p { class: "reel-caption", "{reel.content}" }

                        div { class: "reel-actions",
                            {
                                let post_id = reel.id.clone();
                                let liked = reel.user_reaction.is_some();
                                let total = reel.reaction_total();
                                rsx! {
                                    button {
                                        class: if liked { "button button--ghost liked" } else { "button button--ghost" },
                                        onclick: move |_| toggle_like(post_id.clone(), liked),
                                        if liked { "Unlike ({total})" } else { "Like ({total})" }
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
