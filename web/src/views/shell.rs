//! Authenticated app chrome: top bar, sidebar navigation, content slot.

use api::push::ConnState;
use dioxus::prelude::*;
use ui::{push_toast, use_notifier, use_session, use_toasts, Avatar, ToastLevel};

use crate::Route;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/feed", "Feed"),
    ("/messages", "Messages"),
    ("/stories", "Stories"),
    ("/reels", "Reels"),
    ("/groups", "Groups"),
    ("/marketplace", "Marketplace"),
    ("/events", "Events"),
    ("/jobs", "Jobs"),
];

fn route_for(path: &str) -> Route {
    match path {
        "/messages" => Route::Messages {},
        "/stories" => Route::Stories {},
        "/reels" => Route::Reels {},
        "/groups" => Route::Groups {},
        "/marketplace" => Route::Marketplace {},
        "/events" => Route::Events {},
        "/jobs" => Route::Jobs {},
        _ => Route::Feed {},
    }
}

/// Layout wrapper for every signed-in screen.
#[component]
pub fn Shell(children: Element) -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();
    let conn = use_notifier();
    let nav = use_navigator();
    let route: Route = use_route();
    let current_path = route.to_string();

    let Some(user) = session.current_user() else {
        // The route guard redirects before this renders without a user;
        // render nothing in the gap.
        return rsx! {};
    };

    let handle_logout = move |_| {
        session.sign_out();
        push_toast(&mut toasts, ToastLevel::Success, "Logged out successfully");
        nav.replace(Route::Landing {});
    };

    rsx! {
        div { class: "shell",
            nav { class: "topbar",
                Link { to: Route::Feed {}, class: "brand", "Social X" }

                div { class: "topbar-actions",
                    span {
                        class: if conn() == ConnState::Open { "conn-dot conn-dot--open" } else { "conn-dot" },
                        title: if conn() == ConnState::Open { "Live updates connected" } else { "Live updates offline" },
                    }
                    Link { to: Route::Search {}, class: "topbar-icon", title: "Search", "Search" }
                    Link {
                        to: Route::Notifications {},
                        class: "topbar-icon",
                        title: "Notifications",
                        "Notifications"
                    }
                    Link {
                        to: Route::Profile { user_id: user.id.clone() },
                        class: "topbar-avatar",
                        Avatar { user: user.clone(), size: 32 }
                    }
                    button { class: "topbar-icon", onclick: handle_logout, "Log out" }
                }
            }

            div { class: "shell-body",
                aside { class: "sidebar",
                    for (path, label) in NAV_LINKS.iter() {
                        Link {
                            to: route_for(path),
                            class: if current_path == *path { "nav-link nav-link--active" } else { "nav-link" },
                            "{label}"
                        }
                    }
                }

                main { class: "content",
                    {children}
                }
            }
        }
    }
}
