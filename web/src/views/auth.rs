//! Sign-in / sign-up screen with email+password tabs and federated login.

use dioxus::prelude::*;
use ui::{make_client, push_toast, use_session, use_toasts, ToastLevel};

use crate::Route;

/// The federated identity broker. It redirects back to the app with a
/// `session_id` in the URL fragment, which `SessionProvider` exchanges at
/// the backend.
const FEDERATED_AUTH_URL: &str = "https://auth.emergentagent.com/";

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Login,
    Register,
}

#[component]
pub fn Auth() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut tab = use_signal(|| Tab::Login);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            loading.set(true);
            let client = make_client();
            match client.login(email().trim(), &password()).await {
                Ok(auth) => {
                    session.finish_login(&auth.token, auth.user);
                    push_toast(&mut toasts, ToastLevel::Success, "Welcome back!");
                    nav.replace(Route::Feed {});
                }
                Err(err) => {
                    push_toast(&mut toasts, ToastLevel::Error, &err.to_string());
                }
            }
            loading.set(false);
        });
    };

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            loading.set(true);
            let client = make_client();
            match client
                .register(email().trim(), &password(), name().trim())
                .await
            {
                Ok(auth) => {
                    session.finish_login(&auth.token, auth.user);
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Account created successfully!",
                    );
                    nav.replace(Route::Feed {});
                }
                Err(err) => {
                    push_toast(&mut toasts, ToastLevel::Error, &err.to_string());
                }
            }
            loading.set(false);
        });
    };

    let handle_google = move |_| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(origin) = window.location().origin() {
                    let url = format!("{FEDERATED_AUTH_URL}?redirect={origin}/feed");
                    let _ = window.location().set_href(&url);
                }
            }
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                Link { to: Route::Landing {}, class: "button button--ghost", "Back" }

                h2 { "Welcome to Social X" }
                p { class: "auth-subtitle", "Connect with the world" }

                button {
                    class: "button button--google",
                    onclick: handle_google,
                    "Continue with Google"
                }

                div { class: "auth-divider", span { "or" } }

                div { class: "auth-tabs",
                    button {
                        class: if tab() == Tab::Login { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Login),
                        "Login"
                    }
                    button {
                        class: if tab() == Tab::Register { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(Tab::Register),
                        "Register"
                    }
                }

                if tab() == Tab::Login {
                    form { class: "auth-form", onsubmit: handle_login,
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            r#type: "password",
                            placeholder: "Password",
                            required: true,
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            class: "button button--primary",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Logging in..." } else { "Login" }
                        }
                    }
                } else {
                    form { class: "auth-form", onsubmit: handle_register,
                        input {
                            r#type: "text",
                            placeholder: "Full name",
                            required: true,
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            r#type: "password",
                            placeholder: "Password",
                            required: true,
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            class: "button button--primary",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }
            }
        }
    }
}
