use dioxus::prelude::*;

use crate::{use_auth, LogoutButton};

/// Top navigation bar. Route links come from the frontend as children so
/// this crate stays router-agnostic.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        header {
            class: "navbar",
            span { class: "navbar-brand", "Flock" }
            nav {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-user",
                if let Some(user) = auth().user {
                    span { class: "navbar-avatar", "{user.initial()}" }
                    span { class: "navbar-name", "{user.full_name}" }
                    LogoutButton { class: "btn btn-outline".to_string() }
                }
            }
        }
    }
}
