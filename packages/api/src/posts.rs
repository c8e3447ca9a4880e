//! Server functions for posts: the unified announcement/event/song-lineup
//! records behind the Post Manager, Events, and Song Lineups screens.

use dioxus::prelude::*;

use crate::models::{PostDraft, PostInfo};

/// List posts, optionally filtered by category and restricted to today or
/// later. Filtered lists come back in service order (target date ascending);
/// the unfiltered feed comes back newest first.
#[cfg(feature = "server")]
#[get("/api/posts")]
pub async fn list_posts(
    category: Option<String>,
    upcoming_only: bool,
) -> Result<Vec<PostInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::PostRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<PostRow> = match category {
        Some(ref cat) if upcoming_only => sqlx::query_as(
            "SELECT * FROM announcements
             WHERE category = $1 AND target_date >= CURRENT_DATE
             ORDER BY target_date ASC",
        )
        .bind(cat)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?,
        Some(ref cat) => sqlx::query_as(
            "SELECT * FROM announcements WHERE category = $1 ORDER BY target_date ASC",
        )
        .bind(cat)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?,
        None => sqlx::query_as("SELECT * FROM announcements ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?,
    };

    Ok(rows.iter().map(PostRow::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/posts")]
pub async fn list_posts(
    category: Option<String>,
    upcoming_only: bool,
) -> Result<Vec<PostInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a post. Requires an authenticated member.
#[cfg(feature = "server")]
#[post("/api/posts", session: tower_sessions::Session)]
pub async fn create_post(draft: PostDraft) -> Result<PostInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::PostRow;

    let user = crate::require_user(&session).await?;
    draft.validate().map_err(|e| ServerFnError::new(e))?;

    let target_date = chrono::NaiveDate::parse_from_str(draft.target_date.trim(), "%Y-%m-%d")
        .map_err(|_| ServerFnError::new("Date must be YYYY-MM-DD"))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (location, songs, external_link) = draft.details.to_columns();
    let row: PostRow = sqlx::query_as(
        "INSERT INTO announcements
            (title, description, category, target_date, target_time,
             location, song_1, song_2, song_3, song_4, external_link)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
         RETURNING *",
    )
    .bind(draft.title.trim())
    .bind(draft.description.trim())
    .bind(draft.details.category())
    .bind(target_date)
    .bind(&draft.target_time)
    .bind(&location)
    .bind(&songs[0])
    .bind(&songs[1])
    .bind(&songs[2])
    .bind(&songs[3])
    .bind(&external_link)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "announcements")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(author = %user.full_name, category = row.category, "created post");
    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/posts")]
pub async fn create_post(draft: PostDraft) -> Result<PostInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a post by id. Requires an authenticated member.
#[cfg(feature = "server")]
#[post("/api/posts/delete", session: tower_sessions::Session)]
pub async fn delete_post(id: String) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let _user = crate::require_user(&session).await?;

    let post_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM announcements WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "announcements")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/posts/delete")]
pub async fn delete_post(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Distinct upcoming song-lineup dates, ascending. Feeds the duty roster's
/// service-date dropdown.
#[cfg(feature = "server")]
#[get("/api/posts/lineup-dates")]
pub async fn lineup_dates() -> Result<Vec<String>, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<(chrono::NaiveDate,)> = sqlx::query_as(
        "SELECT DISTINCT target_date FROM announcements
         WHERE category = 'song-lineup'
           AND target_date IS NOT NULL
           AND target_date >= CURRENT_DATE
         ORDER BY target_date ASC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|(d,)| d.format("%Y-%m-%d").to_string())
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/posts/lineup-dates")]
pub async fn lineup_dates() -> Result<Vec<String>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
