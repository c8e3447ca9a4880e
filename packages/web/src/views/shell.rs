//! Signed-in layout: navbar plus the routed screen. Unauthenticated
//! visitors are bounced to the login page.

use dioxus::prelude::*;
use ui::{use_auth, Navbar};

use crate::Route;

#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_none() {
            nav.replace(Route::Login {});
        }
    });

    if auth().loading {
        return rsx! {
            div { class: "page",
                p { class: "muted", "Loading..." }
            }
        };
    }

    rsx! {
        Navbar {
            Link { to: Route::Dashboard {}, "Dashboard" }
            Link { to: Route::Announcements {}, "Posts" }
            Link { to: Route::Events {}, "Events" }
            Link { to: Route::SongLineups {}, "Lineups" }
            Link { to: Route::LifeGroups {}, "Life Groups" }
            Link { to: Route::Roster {}, "Roster" }
            Link { to: Route::Members {}, "Members" }
            Link { to: Route::Profile {}, "Profile" }
        }
        Outlet::<Route> {}
    }
}
