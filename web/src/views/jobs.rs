//! Job board: postings with a create-posting form.

use api::models::JobPost;
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_toasts, ToastLevel};

use super::Shell;

#[component]
pub fn Jobs() -> Element {
    let mut toasts = use_toasts();

    let mut posts = use_signal(Vec::<JobPost>::new);
    let mut loading = use_signal(|| true);
    let mut creating = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut requirements = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut salary = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.job_posts().await {
            Ok(loaded) => posts.set(loaded),
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let client = make_client();
            let salary = salary();
            let salary = salary.trim();
            let salary_range = (!salary.is_empty()).then_some(salary);
            match client
                .create_job_post(
                    title().trim(),
                    description().trim(),
                    requirements().trim(),
                    location().trim(),
                    salary_range,
                )
                .await
            {
                Ok(()) => {
                    title.set(String::new());
                    description.set(String::new());
                    requirements.set(String::new());
                    location.set(String::new());
                    creating.set(false);
                    push_toast(&mut toasts, ToastLevel::Success, "Job posted");
                    if let Ok(loaded) = client.job_posts().await {
                        posts.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Shell {
            div { class: "jobs",
                div { class: "page-header",
                    h2 { "Jobs" }
                    button {
                        class: "button button--primary",
                        onclick: move |_| creating.set(!creating()),
                        if creating() { "Cancel" } else { "Post a job" }
                    }
                }

                if creating() {
                    form { class: "create-form card", onsubmit: handle_create,
                        input {
                            r#type: "text",
                            placeholder: "Job title",
                            required: true,
                            value: title(),
                            oninput: move |evt| title.set(evt.value()),
                        }
                        textarea {
                            placeholder: "Description",
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                        textarea {
                            placeholder: "Requirements",
                            value: requirements(),
                            oninput: move |evt| requirements.set(evt.value()),
                        }
                        input {
                            r#type: "text",
                            placeholder: "Location",
                            required: true,
                            value: location(),
                            oninput: move |evt| location.set(evt.value()),
                        }
                        input {
                            r#type: "text",
                            placeholder: "Salary range (optional)",
                            value: salary(),
                            oninput: move |evt| salary.set(evt.value()),
                        }
                        button { class: "button button--primary", r#type: "submit", "Post" }
                    }
                }

                if loading() {
                    div { class: "placeholder", "Loading job posts..." }
                } else if posts().is_empty() {
                    div { class: "placeholder", "No openings right now." }
                }

                for post in posts().iter() {
                    div { key: "{post.id}", class: "card job",
                        h3 { "{post.title}" }
                        span { class: "job-location", "{post.location}" }
                        if let Some(salary) = &post.salary_range {
                            span { class: "job-salary", "{salary}" }
                        }
                        p { "{post.description}" }
                        if !post.requirements.is_empty() {
                            p { class: "job-requirements", "Requirements: {post.requirements}" }
                        }
                    }
                }
            }
        }
    }
}
