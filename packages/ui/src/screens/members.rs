//! Member directory, alphabetical, with a client-side name filter.

use dioxus::prelude::*;

use crate::components::Input;

use api::models::UserInfo;

#[component]
pub fn MembersScreen() -> Element {
    let mut members = use_signal(Vec::<UserInfo>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(String::new);

    let load = move || async move {
        match api::profile::list_members().await {
            Ok(items) => {
                members.set(items);
                load_error.set(None);
            }
            Err(e) => load_error.set(Some(e.to_string())),
        }
        loading.set(false);
    };

    let _ = use_resource(move || load());

    crate::use_collection_watch(
        "users",
        EventHandler::new(move |()| {
            spawn(async move {
                load().await;
            });
        }),
    );

    let needle = filter().to_lowercase();
    let shown: Vec<UserInfo> = members()
        .into_iter()
        .filter(|m| needle.is_empty() || m.full_name.to_lowercase().contains(&needle))
        .collect();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Members" }

            Input {
                placeholder: "Search by name",
                value: filter(),
                oninput: move |evt: FormEvent| filter.set(evt.value()),
            }

            if let Some(err) = load_error() {
                div { class: "status status-error", "Could not load members: {err}" }
            } else if loading() {
                p { class: "muted", "Loading..." }
            } else if shown.is_empty() {
                p { class: "muted", "No members match." }
            }

            ul {
                class: "card-list",
                for member in shown {
                    li {
                        key: "{member.id}",
                        class: "card member-card",
                        if let Some(url) = &member.avatar_url {
                            img { class: "member-avatar", src: "{url}", alt: "{member.full_name}" }
                        } else {
                            span { class: "member-avatar member-avatar-placeholder", "{member.initial()}" }
                        }
                        div {
                            class: "member-details",
                            span { class: "card-title", "{member.full_name}" }
                            span { class: "card-meta", "{member.ministry}" }
                            if let Some(phone) = &member.phone {
                                span { class: "card-meta", "{phone}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
