//! User avatar with an initials fallback.

use api::models::User;
use dioxus::prelude::*;

/// Round avatar image. Falls back to a generated initials image when the
/// user has no picture set.
#[component]
pub fn Avatar(user: User, #[props(default = 32)] size: u32) -> Element {
    let src = user.picture.clone().unwrap_or_else(|| {
        format!("https://api.dicebear.com/7.x/initials/svg?seed={}", user.name)
    });

    rsx! {
        img {
            class: "avatar",
            width: "{size}",
            height: "{size}",
            src: "{src}",
            alt: "{user.name}",
        }
    }
}
