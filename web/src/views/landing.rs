//! Public landing page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "landing",
            header { class: "landing-header",
                span { class: "brand", "Social X" }
                Link { to: Route::Auth {}, class: "button button--ghost", "Sign in" }
            }

            section { class: "landing-hero",
                h1 { "Connect with the world" }
                p {
                    "Share posts, stories, and reels. Chat with friends, join groups, "
                    "find events and jobs — all in one place."
                }
                Link { to: Route::Auth {}, class: "button button--primary", "Get started" }
            }

            section { class: "landing-features",
                div { class: "feature-card",
                    h3 { "Stay in touch" }
                    p { "Direct messages with realtime notifications." }
                }
                div { class: "feature-card",
                    h3 { "Share moments" }
                    p { "Stories that last a day, reels that don't." }
                }
                div { class: "feature-card",
                    h3 { "Beyond the feed" }
                    p { "Groups, marketplace listings, events, and job postings." }
                }
            }
        }
    }
}
