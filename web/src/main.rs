use dioxus::prelude::*;

use ui::{SessionProvider, Toaster};
use views::{
    Auth, Events, Feed, Groups, Jobs, Landing, Marketplace, Messages, Notifications, Profile,
    Reels, Search, Stories,
};

mod guard;
mod views;

use guard::Gate;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(RouteGuard)]
        #[route("/")]
        Landing {},
        #[route("/auth")]
        Auth {},
        #[route("/feed")]
        Feed {},
        #[route("/profile/:user_id")]
        Profile { user_id: String },
        #[route("/messages")]
        Messages {},
        #[route("/stories")]
        Stories {},
        #[route("/reels")]
        Reels {},
        #[route("/groups")]
        Groups {},
        #[route("/marketplace")]
        Marketplace {},
        #[route("/events")]
        Events {},
        #[route("/jobs")]
        Jobs {},
        #[route("/notifications")]
        Notifications {},
        #[route("/search")]
        Search {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Toaster {
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Single gate between the session and every route: unauthenticated visitors
/// only reach the landing and auth screens, signed-in users are steered away
/// from them. Holds rendering until the startup bootstrap has resolved so a
/// stored token never flashes the landing page.
#[component]
fn RouteGuard() -> Element {
    let session = ui::use_session();
    let route: Route = use_route();
    let nav = use_navigator();

    if session.loading() {
        return rsx! {
            div { class: "boot-screen",
                div { class: "spinner" }
            }
        };
    }

    match guard::gate(&route.to_string(), session.is_authenticated()) {
        Gate::Allow => rsx! {
            Outlet::<Route> {}
        },
        Gate::ToLanding => {
            nav.replace(Route::Landing {});
            rsx! {}
        }
        Gate::ToFeed => {
            nav.replace(Route::Feed {});
            rsx! {}
        }
    }
}
