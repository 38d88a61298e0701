//! Events: upcoming events with a create-event form.

use api::models::Event;
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_toasts, ToastLevel};

use super::Shell;

#[component]
pub fn Events() -> Element {
    let mut toasts = use_toasts();

    let mut events = use_signal(Vec::<Event>::new);
    let mut loading = use_signal(|| true);
    let mut creating = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut event_date = use_signal(String::new);
    let mut location = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.events().await {
            Ok(loaded) => events.set(loaded),
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let client = make_client();
            match client
                .create_event(
                    title().trim(),
                    description().trim(),
                    event_date().trim(),
                    location().trim(),
                )
                .await
            {
                Ok(()) => {
                    title.set(String::new());
                    description.set(String::new());
                    event_date.set(String::new());
                    location.set(String::new());
                    creating.set(false);
                    push_toast(&mut toasts, ToastLevel::Success, "Event created");
                    if let Ok(loaded) = client.events().await {
                        events.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Shell {
            div { class: "events",
                div { class: "page-header",
                    h2 { "Events" }
                    button {
                        class: "button button--primary",
                        onclick: move |_| creating.set(!creating()),
                        if creating() { "Cancel" } else { "Create event" }
                    }
                }

                if creating() {
                    form { class: "create-form card", onsubmit: handle_create,
                        input {
                            r#type: "text",
                            placeholder: "Event title",
                            required: true,
                            value: title(),
                            oninput: move |evt| title.set(evt.value()),
                        }
                        textarea {
                            placeholder: "Description",
                            value: description(),
                            oninput: move |evt| description.set(evt.value()),
                        }
                        input {
                            r#type: "datetime-local",
                            required: true,
                            value: event_date(),
                            oninput: move |evt| event_date.set(evt.value()),
                        }
                        input {
                            r#type: "text",
                            placeholder: "Location",
                            required: true,
                            value: location(),
                            oninput: move |evt| location.set(evt.value()),
                        }
                        button { class: "button button--primary", r#type: "submit", "Create" }
                    }
                }

                if loading() {
                    div { class: "placeholder", "Loading events..." }
                } else if events().is_empty() {
                    div { class: "placeholder", "No upcoming events." }
                }

                for event in events().iter() {
                    div { key: "{event.id}", class: "card event",
                        h3 { "{event.title}" }
                        span { class: "event-when", "{event.event_date} · {event.location}" }
                        p { "{event.description}" }
                        span { class: "event-attendees",
                            "{event.attendees.len()} attending"
                        }
                    }
                }
            }
        }
    }
}
