//! Marketplace: listings grid with a create-listing form.

use api::models::MarketplaceItem;
use dioxus::prelude::*;
use ui::{make_client, push_toast, use_toasts, ToastLevel};

use super::Shell;

#[component]
pub fn Marketplace() -> Element {
    let mut toasts = use_toasts();

    let mut items = use_signal(Vec::<MarketplaceItem>::new);
    let mut loading = use_signal(|| true);
    let mut creating = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut price = use_signal(String::new);

    let _loader = use_resource(move || async move {
        let client = make_client();
        match client.marketplace().await {
            Ok(loaded) => items.set(loaded),
            Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
        }
        loading.set(false);
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(amount) = price().trim().parse::<f64>() else {
            push_toast(&mut toasts, ToastLevel::Error, "Enter a valid price");
            return;
        };
        spawn(async move {
            let client = make_client();
            match client
                .create_listing(title().trim(), description().trim(), amount)
                .await
            {
                Ok(()) => {
                    title.set(String::new());
                    description.set(String::new());
                    price.set(String::new());
                    creating.set(false);
                    push_toast(&mut toasts, ToastLevel::Success, "Listing published");
                    if let Ok(loaded) = client.marketplace().await {
                        items.set(loaded);
                    }
                }
                Err(err) => push_toast(&mut toasts, ToastLevel::Error, &err.to_string()),
            }
        });
    };

    rsx! {
        Shell {
            div { class: "marketplace",
                div { class: "page-header",
                    h2 { "Marketplace" }
                    button {
                        class: "button button--primary",
                        onclick: move |_| creating.set(!creating()),
                        if creating() { "Cancel" } else { "Sell something" }
                    }
                }

                if creating() {
                    form { class: "create-form card", onsubmit: handle_create,
                        input {
                            r#type: "text",
                            placeholder: "What are you selling?",
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
                            r#type: "number",
                            placeholder: "Price",
                            required: true,
                            min: "0",
                            step: "0.01",
                            value: price(),
                            oninput: move |evt| price.set(evt.value()),
                        }
                        button { class: "button button--primary", r#type: "submit", "Publish" }
                    }
                }

                if loading() {
                    div { class: "placeholder", "Loading listings..." }
                } else if items().is_empty() {
                    div { class: "placeholder", "Nothing for sale yet." }
                }

                div { class: "card-grid",
                    for item in items().iter() {
                        div { key: "{item.id}", class: "card listing",
                            for image in item.images.iter().take(1) {
                                img { class: "listing-image", src: "{image}" }
                            }
                            h3 { "{item.title}" }
                            span { class: "listing-price", "${item.price}" }
                            p { "{item.description}" }
                            if let Some(seller) = &item.seller {
                                span { class: "listing-seller", "Sold by {seller.name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
