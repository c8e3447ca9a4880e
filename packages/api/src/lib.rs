//! # API crate — shared fullstack server functions for Flock
//!
//! Everything the web and mobile frontends call lives here, along with the
//! supporting modules the server side depends on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Password hashing, session keys, and the ministry/role guard rules |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`models`] | — | Database rows (server only) and their client-safe DTO projections |
//! | [`posts`] | — | Announcement/event/song-lineup CRUD and the lineup date feed |
//! | [`roster`] | — | Worship-team duty roster operations |
//! | [`lifegroup`] | — | Life group logs and attendance lists |
//! | [`profile`] | — | Member directory, profile edits, avatar upload |
//! | [`dashboard`] | — | Aggregate stats for the dashboard screen |
//! | [`revision`] | — | Per-collection change counters backing live refresh |
//! | [`storage`] | `server` | Avatar blob storage on the local filesystem |
//!
//! ## Server functions
//!
//! Every public `async fn` annotated with `#[get(...)]`/`#[post(...)]` is a
//! Dioxus server function, compiled twice: with full server logic behind
//! `#[cfg(feature = "server")]` and as a thin client stub that forwards the
//! call over HTTP. Authentication functions live in this file; domain
//! operations live in their modules.

use dioxus::prelude::*;

pub mod auth;
pub mod dashboard;
#[cfg(feature = "server")]
pub mod db;
pub mod lifegroup;
pub mod models;
pub mod posts;
pub mod profile;
pub mod revision;
pub mod roster;
#[cfg(feature = "server")]
pub mod storage;

pub use models::{
    Availability, LifeGroupInfo, LifeGroupMemberInfo, PostDetails, PostDraft, PostInfo,
    RosterEntryInfo, UserInfo,
};
pub use revision::collection_revision;

/// Get the current authenticated user's profile from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Register a new member: auth credentials plus profile row, written in one
/// transaction. Registration does not sign the member in; they log in with
/// their new credentials afterwards.
#[cfg(feature = "server")]
#[post("/api/auth/register")]
pub async fn register(
    full_name: String,
    email: String,
    password: String,
    ministry: String,
) -> Result<(), ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();
    let full_name = full_name.trim().to_string();

    if full_name.is_empty() {
        return Err(ServerFnError::new("Full name is required"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }
    if !auth::MINISTRIES.contains(&ministry.as_str()) {
        return Err(ServerFnError::new("Unknown ministry"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT 1 AS n FROM accounts WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash =
        auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    // Credentials and profile commit together or not at all.
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (account_id,): (uuid::Uuid,) = sqlx::query_as(
        "INSERT INTO accounts (email, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO users (id, email, full_name, ministry) VALUES ($1, $2, $3, $4)",
    )
    .bind(account_id)
    .bind(&email)
    .bind(&full_name)
    .bind(&ministry)
    .execute(&mut *tx)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    revision::bump(pool, "users")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(%email, "registered new member");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    full_name: String,
    email: String,
    password: String,
    ministry: String,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password. An account whose profile row is missing is
/// treated as invalid and never receives a session.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let account: Option<(uuid::Uuid, String)> =
        sqlx::query_as("SELECT id, password_hash FROM accounts WHERE email = $1")
            .bind(&email)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((account_id, hash)) = account else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid =
        auth::verify_password(&password, &hash).map_err(|e| ServerFnError::new(e))?;
    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(account_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = match auth::require_member_profile(user) {
        Ok(user) => user,
        Err(msg) => {
            tracing::warn!(%email, "login for account without profile row");
            return Err(ServerFnError::new(msg));
        }
    };

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Helper: resolve the session to a full profile row, or fail the request.
#[cfg(feature = "server")]
pub(crate) async fn require_user(
    session: &tower_sessions::Session,
) -> Result<models::User, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(auth::SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Err(ServerFnError::new("Not authenticated"));
    };

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    user.ok_or_else(|| ServerFnError::new("Not authenticated"))
}
