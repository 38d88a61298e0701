//! Home feed: composer, posts from followed users, reactions, comments.

use api::models::{Comment, FeedPost};
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_session, use_toasts, Avatar, ToastLevel};

use super::Shell;

const PAGE_SIZE: u32 = 20;

#[component]
pub fn Feed() -> Element {
    let session = use_session();
    let mut toasts = use_toasts();

    let mut posts = use_signal(Vec::<FeedPost>::new);
    let mut loading = use_signal(|| true);
    let mut draft = use_signal(String::new);
    let mut posting = use_signal(|| false);

    // One open comment thread at a time.
    let mut open_thread = use_signal(|| Option::<String>::None);
    let mut comments = use_signal(Vec::<Comment>::new);
    let mut comment_draft = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.feed(0, PAGE_SIZE).await {
            Ok(loaded) => posts.set(loaded),
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    let handle_post = move |evt: FormEvent| {
        evt.prevent_default();
        let content = draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        spawn(async move {
            posting.set(true);
            let client = make_client();
            match client.create_post(&content, "regular").await {
                Ok(()) => {
                    draft.set(String::new());
                    if let Ok(loaded) = client.feed(0, PAGE_SIZE).await {
                        posts.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
            posting.set(false);
        });
    };

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
                    if let Ok(loaded) = client.feed(0, PAGE_SIZE).await {
                        posts.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    let mut toggle_thread = move |post_id: String| {
        if open_thread() == Some(post_id.clone()) {
            open_thread.set(None);
            return;
        }
        open_thread.set(Some(post_id.clone()));
        comments.set(Vec::new());
        comment_draft.set(String::new());
        spawn(async move {
            let client = make_client();
            match client.comments(&post_id).await {
                Ok(loaded) => comments.set(loaded),
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    let mut submit_comment = move |post_id: String| {
        let content = comment_draft().trim().to_string();
        if content.is_empty() {
            return;
        }
        spawn(async move {
            let client = make_client();
            match client.add_comment(&post_id, &content).await {
                Ok(()) => {
                    comment_draft.set(String::new());
                    if let Ok(loaded) = client.comments(&post_id).await {
                        comments.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Shell {
            div { class: "feed",
                if let Some(user) = session.current_user() {
                    form { class: "composer card", onsubmit: handle_post,
                        Avatar { user: user.clone(), size: 40 }
                        textarea {
                            placeholder: "What's on your mind?",
                            value: draft(),
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button {
                            class: "button button--primary",
                            r#type: "submit",
                            disabled: posting(),
                            if posting() { "Posting..." } else { "Post" }
                        }
                    }
                }

                if loading() {
                    div { class: "placeholder", "Loading feed..." }
                } else if posts().is_empty() {
                    div { class: "placeholder",
                        "Nothing here yet. Follow people to fill your feed."
                    }
                }

                for post in posts().iter() {
                    div { key: "{post.id}", class: "post card",
                        div { class: "post-header",
                            if let Some(author) = &post.user {
                                Avatar { user: author.clone(), size: 36 }
                                span { class: "post-author", "{author.name}" }
                            }
                            span { class: "post-time", "{post.created_at}" }
                        }

                        p { class: "post-content", "{post.content}" }

                        for url in post.media_urls.iter() {
                            img { class: "post-media", src: "{url}" }
                        }

                        div { class: "post-stats",
                            span { "{post.reaction_total()} reactions" }
                            span { "{post.comment_count} comments" }
                        }

                        div { class: "post-actions",
                            {
                                let post_id = post.id.clone();
                                let liked = post.user_reaction.is_some();
                                rsx! {
                                    button {
                                        class: if liked { "button button--ghost liked" } else { "button button--ghost" },
                                        onclick: move |_| toggle_like(post_id.clone(), liked),
                                        if liked { "Unlike" } else { "Like" }
                                    }
                                }
                            }
                            {
                                let post_id = post.id.clone();
                                rsx! {
                                    button {
                                        class: "button button--ghost",
                                        onclick: move |_| toggle_thread(post_id.clone()),
                                        "Comments"
                                    }
                                }
                            }
                        }

                        if open_thread() == Some(post.id.clone()) {
                            div { class: "comments",
                                for comment in comments().iter() {
                                    div { key: "{comment.id}", class: "comment",
                                        if let Some(author) = &comment.user {
                                            span { class: "comment-author", "{author.name}" }
                                        }
                                        span { class: "comment-body", "{comment.content}" }
                                    }
                                }

                                {
                                    let post_id = post.id.clone();
                                    rsx! {
                                        form {
                                            class: "comment-form",
                                            onsubmit: move |evt: FormEvent| {
                                                evt.prevent_default();
                                                submit_comment(post_id.clone());
                                            },
                                            input {
                                                r#type: "text",
                                                placeholder: "Write a comment...",
                                                value: comment_draft(),
                                                oninput: move |evt| comment_draft.set(evt.value()),
                                            }
                                            button { class: "button button--primary", r#type: "submit", "Reply" }
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
}
