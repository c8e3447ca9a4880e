//! Server functions for the member directory and the profile screen.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

/// Editable profile fields. Text fields left `None` keep their current
/// value and `Some("")` clears one. Age keeps its value unless a new one is
/// given or `clear_age` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub age: Option<i32>,
    pub clear_age: bool,
}

impl ProfileUpdate {
    /// Interpret a form's age field: blank clears the stored age, digits in
    /// a plausible range set it, anything else is rejected.
    pub fn parse_age_field(raw: &str) -> Result<(Option<i32>, bool), &'static str> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok((None, true));
        }
        match raw.parse::<i32>() {
            Ok(n) if (0..=150).contains(&n) => Ok((Some(n), false)),
            _ => Err("Age must be a number"),
        }
    }
}

/// List every member profile for the directory, alphabetically.
#[cfg(feature = "server")]
#[get("/api/members", session: tower_sessions::Session)]
pub async fn list_members() -> Result<Vec<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    crate::require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<User> = sqlx::query_as("SELECT * FROM users ORDER BY full_name ASC")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(User::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/members")]
pub async fn list_members() -> Result<Vec<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update the signed-in member's own profile fields and return the fresh
/// profile.
#[cfg(feature = "server")]
#[post("/api/profile", session: tower_sessions::Session)]
pub async fn update_profile(update: ProfileUpdate) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user = crate::require_user(&session).await?;

    if let Some(ref birth_date) = update.birth_date {
        let birth_date = birth_date.trim();
        if !birth_date.is_empty() {
            chrono::NaiveDate::parse_from_str(birth_date, "%Y-%m-%d")
                .map_err(|_| ServerFnError::new("Birth date must be YYYY-MM-DD"))?;
        }
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: User = sqlx::query_as(
        "UPDATE users SET
            phone = COALESCE($1, phone),
            address = COALESCE($2, address),
            birth_date = COALESCE($3, birth_date),
            age = CASE WHEN $5 THEN NULL ELSE COALESCE($4, age) END,
            updated_at = NOW()
         WHERE id = $6
         RETURNING *",
    )
    .bind(update.phone.as_deref().map(str::trim))
    .bind(update.address.as_deref().map(str::trim))
    .bind(update.birth_date.as_deref().map(str::trim))
    .bind(update.age)
    .bind(update.clear_age)
    .bind(user.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "users")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %user.id, "profile updated");
    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile")]
pub async fn update_profile(update: ProfileUpdate) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Store a new avatar image for the signed-in member and return the fresh
/// profile carrying its URL.
#[cfg(feature = "server")]
#[post("/api/profile/avatar", session: tower_sessions::Session)]
pub async fn upload_avatar(
    data: Vec<u8>,
    content_type: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;
    use crate::storage;

    let user = crate::require_user(&session).await?;

    let url = storage::store_avatar(user.id, &data, &content_type)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: User = sqlx::query_as(
        "UPDATE users SET avatar_url = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
    )
    .bind(&url)
    .bind(user.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "users")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %user.id, %url, "avatar uploaded");
    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/avatar")]
pub async fn upload_avatar(
    data: Vec<u8>,
    content_type: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_age_field_clears() {
        assert_eq!(ProfileUpdate::parse_age_field(""), Ok((None, true)));
        assert_eq!(ProfileUpdate::parse_age_field("   "), Ok((None, true)));
    }

    #[test]
    fn numeric_age_field_sets() {
        assert_eq!(ProfileUpdate::parse_age_field("34"), Ok((Some(34), false)));
        assert_eq!(ProfileUpdate::parse_age_field(" 7 "), Ok((Some(7), false)));
    }

    #[test]
    fn junk_age_field_is_rejected() {
        assert!(ProfileUpdate::parse_age_field("abc").is_err());
        assert!(ProfileUpdate::parse_age_field("-1").is_err());
        assert!(ProfileUpdate::parse_age_field("500").is_err());
    }
}
