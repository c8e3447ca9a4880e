//! Events screen with Upcoming and Memories tabs. Upcoming shows events
//! dated today or later in service order; Memories shows the past ones.
//! The today cutoff lives server-side, so Memories is just the full list
//! minus the upcoming ids.

use std::collections::HashSet;

use dioxus::prelude::*;

use api::models::PostInfo;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Upcoming,
    Memories,
}

async fn fetch_events(tab: Tab) -> Result<Vec<PostInfo>, String> {
    let category = Some(api::models::CATEGORY_EVENT.to_string());
    let upcoming = api::posts::list_posts(category.clone(), true)
        .await
        .map_err(|e| e.to_string())?;
    match tab {
        Tab::Upcoming => Ok(upcoming),
        Tab::Memories => {
            let upcoming_ids: HashSet<String> = upcoming.into_iter().map(|p| p.id).collect();
            let mut past: Vec<PostInfo> = api::posts::list_posts(category, false)
                .await
                .map_err(|e| e.to_string())?
                .into_iter()
                .filter(|p| !upcoming_ids.contains(&p.id))
                .collect();
            // Most recent memory first.
            past.reverse();
            Ok(past)
        }
    }
}

#[component]
pub fn EventsScreen() -> Element {
    let mut tab = use_signal(|| Tab::Upcoming);
    let mut events = use_signal(Vec::<PostInfo>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);

    let load = move || async move {
        match fetch_events(tab()).await {
            Ok(items) => {
                events.set(items);
                load_error.set(None);
            }
            Err(e) => load_error.set(Some(e)),
        }
        loading.set(false);
    };

    let _ = use_resource(move || {
        // Depend on the tab so switching reloads.
        let _ = tab();
        load()
    });

    crate::use_collection_watch(
        "announcements",
        EventHandler::new(move |()| {
            spawn(async move {
                load().await;
            });
        }),
    );

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Events" }

            div {
                class: "tabs",
                button {
                    class: if tab() == Tab::Upcoming { "tab tab-active" } else { "tab" },
                    onclick: move |_| {
                        tab.set(Tab::Upcoming);
                        loading.set(true);
                    },
                    "Upcoming"
                }
                button {
                    class: if tab() == Tab::Memories { "tab tab-active" } else { "tab" },
                    onclick: move |_| {
                        tab.set(Tab::Memories);
                        loading.set(true);
                    },
                    "Memories"
                }
            }

            if let Some(err) = load_error() {
                div { class: "status status-error", "Could not load events: {err}" }
            } else if loading() {
                p { class: "muted", "Loading..." }
            } else if events().is_empty() {
                p { class: "muted",
                    if tab() == Tab::Upcoming { "No upcoming events." } else { "No memories yet." }
                }
            }

            ul {
                class: "card-list",
                for event in events() {
                    li {
                        key: "{event.id}",
                        class: "card",
                        div {
                            class: "card-header",
                            h3 { class: "card-title", "{event.title}" }
                            if let Some(date) = &event.target_date {
                                span { class: "card-date", "{date}" }
                            }
                            if let Some(time) = &event.target_time {
                                span { class: "card-date", "{time}" }
                            }
                        }
                        if let api::models::PostDetails::Event { location: Some(loc) } = &event.details {
                            p { class: "card-meta", "{loc}" }
                        }
                        p { class: "card-body", "{event.description}" }
                    }
                }
            }
        }
    }
}
