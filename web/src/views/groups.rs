//! Groups directory with a create-group form.

use api::models::Group;
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_toasts, ToastLevel};

use super::Shell;

#[component]
pub fn Groups() -> Element {
    let mut toasts = use_toasts();

    let mut groups = use_signal(Vec::<Group>::new);
    let mut loading = use_signal(|| true);
    let mut creating = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut group_type = use_signal(|| "public".to_string());

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.groups().await {
            Ok(loaded) => groups.set(loaded),
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        if name().trim().is_empty() {
            return;
        }
        spawn(async move {
            let client = make_client();
            match client
                .create_group(name().trim(), description().trim(), &group_type())
                .await
            {
                Ok(()) => {
                    name.set(String::new());
                    description.set(String::new());
                    creating.set(false);
                    push_toast(&mut toasts, ToastLevel::Success, "Group created");
                    if let Ok(loaded) = client.groups().await {
                        groups.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Shell {
            div { class: "groups",
                div { class: "page-header",
                    h2 { "Groups" }
                    button {
                        class: "button button--primary",
                        onclick: move |_| creating.set(!creating()),
                        if creating() { "Cancel" } else { "Create group" }
                    }
                }

                if creating() {
                    form { class: "create-form card", onsubmit: handle_create,
                        input {
                            r#type: "text",
                            placeholder: "Group name",
                            required: true,
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                        textarea {
                            placeholder: "What is this group about?",
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                        select {
                            value: group_type(),
                            onchange: move |evt| group_type.set(evt.value()),
                            option { value: "public", "Public" }
                            option { value: "private", "Private" }
                        }
                        button { class: "button button--primary", r#type: "submit", "Create" }
                    }
                }

                if loading() {
                    div { class: "placeholder", "Loading groups..." }
                } else if groups().is_empty() {
                    div { class: "placeholder", "No groups yet. Create the first one." }
                }

                div { class: "card-grid",
                    for group in groups().iter() {
                        div { key: "{group.id}", class: "card",
                            h3 { "{group.name}" }
                            span { class: "badge", "{group.group_type}" }
                            p { "{group.description}" }
                        }
                    }
                }
            }
        }
    }
}
