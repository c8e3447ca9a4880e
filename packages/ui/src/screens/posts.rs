//! Post manager: create and delete announcements, events, and song lineups.
//!
//! The list is a [`liststate::SnapshotList`]: loads replace it wholesale,
//! deletes are marked pending until the member confirms, and remote changes
//! arrive through the collection watch.

use dioxus::prelude::*;
use liststate::{SnapshotList, Trigger};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::{now_millis, use_auth, use_status, ConfirmDelete, StatusBanner};

use api::models::{PostDetails, PostDraft, PostInfo};

const CATEGORY_LABELS: [(&str, &str); 3] = [
    (api::models::CATEGORY_ANNOUNCEMENT, "Announcement"),
    (api::models::CATEGORY_EVENT, "Event"),
    (api::models::CATEGORY_SONG_LINEUP, "Song Lineup"),
];

fn details_for(category: &str, location: String, songs: [String; 4], link: String) -> PostDetails {
    let some_if_filled = |s: String| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    };
    match category {
        api::models::CATEGORY_EVENT => PostDetails::Event {
            location: some_if_filled(location),
        },
        api::models::CATEGORY_SONG_LINEUP => PostDetails::SongLineup {
            songs: songs.map(some_if_filled),
            external_link: some_if_filled(link),
        },
        _ => PostDetails::Announcement,
    }
}

#[component]
pub fn PostManagerScreen() -> Element {
    let auth = use_auth();
    let mut status = use_status();

    let mut posts = use_signal(SnapshotList::<PostInfo>::default);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);

    let load = move || async move {
        match api::posts::list_posts(None, false).await {
            Ok(items) => {
                posts.write().replace(items);
                load_error.set(None);
            }
            Err(e) => load_error.set(Some(e.to_string())),
        }
        loading.set(false);
    };

    let _ = use_resource(move || load());

    let mut gate = crate::use_collection_watch(
        "announcements",
        EventHandler::new(move |()| {
            spawn(async move {
                load().await;
            });
        }),
    );

    // Reload on demand after our own writes, through the same gate.
    let mut reload_now = move || {
        if gate.write().begin(now_millis(), Trigger::Direct) {
            spawn(async move {
                load().await;
                gate.write().finish(now_millis());
            });
        }
    };

    // Form state
    let mut category = use_signal(|| api::models::CATEGORY_ANNOUNCEMENT.to_string());
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut target_date = use_signal(String::new);
    let mut target_time = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut songs = use_signal(|| [const { String::new() }; 4]);
    let mut external_link = use_signal(String::new);

    let mut clear_form = move || {
        title.set(String::new());
        description.set(String::new());
        target_date.set(String::new());
        target_time.set(String::new());
        location.set(String::new());
        songs.set([const { String::new() }; 4]);
        external_link.set(String::new());
    };

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let draft = PostDraft {
                title: title().trim().to_string(),
                description: description().trim().to_string(),
                target_date: target_date().trim().to_string(),
                target_time: {
                    let t = target_time().trim().to_string();
                    if t.is_empty() {
                        None
                    } else {
                        Some(t)
                    }
                },
                details: details_for(&category(), location(), songs(), external_link()),
            };
            if let Err(e) = draft.validate() {
                status.error(e);
                return;
            }
            match api::posts::create_post(draft).await {
                Ok(_) => {
                    status.success("Post created");
                    clear_form();
                    reload_now();
                }
                Err(e) => status.error(e.to_string()),
            }
        });
    };

    let confirm_delete = move |id: String| {
        spawn(async move {
            if !posts.write().take_pending(&id) {
                return;
            }
            match api::posts::delete_post(id).await {
                Ok(()) => {
                    status.success("Post deleted");
                    reload_now();
                }
                Err(e) => {
                    status.error(e.to_string());
                    reload_now();
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Post Manager" }
            StatusBanner { status: status.current() }
            if let Some(err) = load_error() {
                div { class: "status status-error", "Could not load posts: {err}" }
            }

            form {
                class: "card form",
                onsubmit: handle_create,

                div {
                    class: "form-row",
                    Label { html_for: "post-category", "Category" }
                    select {
                        id: "post-category",
                        class: "select",
                        value: category(),
                        onchange: move |evt| category.set(evt.value()),
                        for (value, label) in CATEGORY_LABELS {
                            option { key: "{value}", value: "{value}", "{label}" }
                        }
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "post-title", "Title" }
                    Input {
                        id: "post-title",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "post-description", "Description" }
                    textarea {
                        id: "post-description",
                        class: "input",
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "post-date", "Date" }
                    Input {
                        id: "post-date",
                        r#type: "date",
                        value: target_date(),
                        oninput: move |evt: FormEvent| target_date.set(evt.value()),
                    }
                }

                div {
                    class: "form-row",
                    Label { html_for: "post-time", "Time" }
                    Input {
                        id: "post-time",
                        placeholder: "9:00 AM",
                        value: target_time(),
                        oninput: move |evt: FormEvent| target_time.set(evt.value()),
                    }
                }

                if category() == api::models::CATEGORY_EVENT {
                    div {
                        class: "form-row",
                        Label { html_for: "post-location", "Location" }
                        Input {
                            id: "post-location",
                            value: location(),
                            oninput: move |evt: FormEvent| location.set(evt.value()),
                        }
                    }
                }

                if category() == api::models::CATEGORY_SONG_LINEUP {
                    for slot in 0..4 {
                        div {
                            key: "{slot}",
                            class: "form-row",
                            Label { html_for: "post-song-{slot}", "Song {slot + 1}" }
                            Input {
                                id: "post-song-{slot}",
                                value: songs()[slot].clone(),
                                oninput: move |evt: FormEvent| songs.write()[slot] = evt.value(),
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        Label { html_for: "post-link", "Chords / media link" }
                        Input {
                            id: "post-link",
                            placeholder: "https://...",
                            value: external_link(),
                            oninput: move |evt: FormEvent| external_link.set(evt.value()),
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Publish"
                }
            }

            h2 { class: "section-title", "All posts" }
            if loading() {
                p { class: "muted", "Loading..." }
            } else if posts.read().is_empty() {
                p { class: "muted", "No posts yet." }
            }
            ul {
                class: "card-list",
                for post in posts.read().items().iter().cloned() {
                    li {
                        key: "{post.id}",
                        class: "card",
                        div {
                            class: "card-header",
                            span { class: "badge", "{post.category()}" }
                            h3 { class: "card-title", "{post.title}" }
                            if let Some(date) = &post.target_date {
                                span { class: "card-date", "{date}" }
                            }
                        }
                        p { class: "card-body", "{post.description}" }

                        if posts.read().is_pending(&post.id) {
                            ConfirmDelete {
                                message: "Delete \"{post.title}\"?",
                                on_confirm: {
                                    let id = post.id.clone();
                                    move |()| confirm_delete(id.clone())
                                },
                                on_cancel: move |()| posts.write().cancel_delete(),
                            }
                        } else if auth().user.is_some() {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let id = post.id.clone();
                                    move |_| posts.write().request_delete(&id)
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
