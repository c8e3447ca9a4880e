//! Aggregate stats for the dashboard screen.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Counters shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub members: i64,
    pub upcoming_events: i64,
    pub song_lineups: i64,
    pub total_posts: i64,
}

/// Fetch all dashboard counters. The member count goes through the
/// `get_user_count()` database function; the rest are plain aggregates.
#[cfg(feature = "server")]
#[get("/api/dashboard/stats")]
pub async fn dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (members,): (i64,) = sqlx::query_as("SELECT get_user_count()")
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (upcoming_events,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM announcements
         WHERE category = 'event' AND target_date >= CURRENT_DATE",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (song_lineups,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM announcements
         WHERE category = 'song-lineup' AND target_date >= CURRENT_DATE",
    )
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (total_posts,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM announcements")
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(DashboardStats {
        members,
        upcoming_events,
        song_lineups,
        total_posts,
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/dashboard/stats")]
pub async fn dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
