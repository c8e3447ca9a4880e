//! Per-collection change counters.
//!
//! The hosted backend the original app leaned on pushed row-change events
//! over a realtime channel. Here the same contract — "any remote change
//! eventually re-runs `load()`" — is carried by a monotonically increasing
//! revision per table: every mutating server function bumps its collection's
//! counter, and screens poll [`collection_revision`] and reload when the
//! number moves. The poll interval and the reload coalescing live client-side
//! (`ui::use_collection_watch`).

use dioxus::prelude::*;

/// Current revision of a collection. Collections that were never written
/// report revision 0.
#[cfg(feature = "server")]
#[get("/api/revision/:collection")]
pub async fn collection_revision(collection: String) -> Result<i64, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<(i64,)> =
        sqlx::query_as("SELECT revision FROM collection_revisions WHERE collection = $1")
            .bind(&collection)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|(r,)| r).unwrap_or(0))
}

#[cfg(not(feature = "server"))]
#[get("/api/revision/:collection")]
pub async fn collection_revision(collection: String) -> Result<i64, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Bump a collection's revision after a committed write.
#[cfg(feature = "server")]
pub(crate) async fn bump(pool: &sqlx::PgPool, collection: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO collection_revisions (collection, revision) VALUES ($1, 1)
         ON CONFLICT (collection) DO UPDATE SET
            revision = collection_revisions.revision + 1,
            updated_at = NOW()",
    )
    .bind(collection)
    .execute(pool)
    .await?;
    Ok(())
}
