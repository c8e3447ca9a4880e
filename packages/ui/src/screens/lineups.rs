//! Song lineups screen: upcoming lineups with their four song slots in
//! order and an optional chords/media link.

use dioxus::prelude::*;

use api::models::{PostDetails, PostInfo};

#[component]
pub fn SongLineupsScreen() -> Element {
    let mut lineups = use_signal(Vec::<PostInfo>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);

    let load = move || async move {
        match api::posts::list_posts(Some(api::models::CATEGORY_SONG_LINEUP.to_string()), true).await
        {
            Ok(items) => {
                lineups.set(items);
                load_error.set(None);
            }
            Err(e) => load_error.set(Some(e.to_string())),
        }
        loading.set(false);
    };

    let _ = use_resource(move || load());

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
            h1 { class: "page-title", "Song Lineups" }

            if let Some(err) = load_error() {
                div { class: "status status-error", "Could not load lineups: {err}" }
            } else if loading() {
                p { class: "muted", "Loading..." }
            } else if lineups().is_empty() {
                p { class: "muted", "No upcoming lineups." }
            }

            ul {
                class: "card-list",
                for lineup in lineups() {
                    li {
                        key: "{lineup.id}",
                        class: "card",
                        div {
                            class: "card-header",
                            h3 { class: "card-title", "{lineup.title}" }
                            if let Some(date) = &lineup.target_date {
                                span { class: "card-date", "{date}" }
                            }
                        }
                        if let PostDetails::SongLineup { songs, external_link } = &lineup.details {
                            ol {
                                class: "song-list",
                                for (slot, song) in songs.iter().enumerate() {
                                    if let Some(song) = song {
                                        li { key: "{slot}", class: "song", "{song}" }
                                    }
                                }
                            }
                            if let Some(link) = external_link {
                                a {
                                    class: "song-link",
                                    href: "{link}",
                                    target: "_blank",
                                    "Chords & media"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
