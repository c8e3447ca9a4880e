//! Dashboard with aggregate counters and a feed of the latest posts.

use dioxus::prelude::*;

use crate::use_auth;

#[component]
pub fn DashboardScreen() -> Element {
    let auth = use_auth();

    let stats = use_resource(|| async { api::dashboard::dashboard_stats().await });
    let recent = use_resource(|| async { api::posts::list_posts(None, false).await });

    rsx! {
        div {
            class: "page",

            if let Some(user) = auth().user {
                h1 { class: "page-title", "Welcome, {user.full_name}" }
            } else {
                h1 { class: "page-title", "Welcome" }
            }

            match &*stats.read() {
                Some(Ok(stats)) => rsx! {
                    div {
                        class: "stat-grid",
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.members}" }
                            span { class: "stat-label", "Members" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.upcoming_events}" }
                            span { class: "stat-label", "Upcoming events" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.song_lineups}" }
                            span { class: "stat-label", "Song lineups" }
                        }
                        div { class: "stat-card",
                            span { class: "stat-value", "{stats.total_posts}" }
                            span { class: "stat-label", "Posts" }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "status status-error", "Could not load stats: {e}" }
                },
                None => rsx! {
                    p { class: "muted", "Loading stats..." }
                },
            }

            h2 { class: "section-title", "Latest" }
            match &*recent.read() {
                Some(Ok(posts)) => rsx! {
                    ul {
                        class: "feed",
                        for post in posts.iter().take(8) {
                            li {
                                key: "{post.id}",
                                class: "feed-item",
                                span { class: "feed-category", "{post.details.category()}" }
                                span { class: "feed-title", "{post.title}" }
                                if let Some(date) = &post.target_date {
                                    span { class: "feed-date", "{date}" }
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { class: "status status-error", "Could not load posts: {e}" }
                },
                None => rsx! {
                    p { class: "muted", "Loading..." }
                },
            }
        }
    }
}
