//! Server functions for the worship-team duty roster.

use dioxus::prelude::*;

use crate::models::RosterEntryInfo;

/// List roster entries for one service date, or every entry when no date is
/// given. Entries come back grouped by date, then by role.
#[cfg(feature = "server")]
#[get("/api/roster")]
pub async fn list_duty_roster(
    service_date: Option<String>,
) -> Result<Vec<RosterEntryInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::RosterRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<RosterRow> = match service_date {
        Some(ref date) => {
            let date = chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                .map_err(|_| ServerFnError::new("Date must be YYYY-MM-DD"))?;
            sqlx::query_as(
                "SELECT * FROM duty_roster WHERE service_date = $1 ORDER BY role ASC",
            )
            .bind(date)
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?
        }
        None => sqlx::query_as(
            "SELECT * FROM duty_roster ORDER BY service_date ASC, role ASC",
        )
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?,
    };

    Ok(rows.iter().map(RosterRow::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/roster")]
pub async fn list_duty_roster(
    service_date: Option<String>,
) -> Result<Vec<RosterEntryInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Assign a member to a role on a service date. Only lineup managers may
/// add entries; new entries start out Pending.
#[cfg(feature = "server")]
#[post("/api/roster", session: tower_sessions::Session)]
pub async fn add_roster_entry(
    full_name: String,
    role: String,
    service_date: String,
) -> Result<RosterEntryInfo, ServerFnError> {
    use crate::auth::{can_manage_lineup, TEAM_ROLES};
    use crate::db::get_pool;
    use crate::models::{Availability, RosterRow};

    let user = crate::require_user(&session).await?;
    if !can_manage_lineup(user.role(), &user.ministry) {
        return Err(ServerFnError::new("Not allowed to manage the roster"));
    }

    let full_name = full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(ServerFnError::new("Member name is required"));
    }
    if !TEAM_ROLES.contains(&role.as_str()) {
        return Err(ServerFnError::new("Unknown team role"));
    }
    let service_date = chrono::NaiveDate::parse_from_str(service_date.trim(), "%Y-%m-%d")
        .map_err(|_| ServerFnError::new("Date must be YYYY-MM-DD"))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: RosterRow = sqlx::query_as(
        "INSERT INTO duty_roster (full_name, role, availability, service_date)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&full_name)
    .bind(&role)
    .bind(Availability::Pending.as_str())
    .bind(service_date)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "duty_roster")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(%full_name, %role, "roster entry added");
    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/roster")]
pub async fn add_roster_entry(
    full_name: String,
    role: String,
    service_date: String,
) -> Result<RosterEntryInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Record a member's availability for a roster entry. A member may only
/// answer for entries carrying their own full name.
#[cfg(feature = "server")]
#[post("/api/roster/availability", session: tower_sessions::Session)]
pub async fn set_roster_availability(
    entry_id: String,
    availability: String,
) -> Result<RosterEntryInfo, ServerFnError> {
    use crate::auth::can_edit_availability;
    use crate::db::get_pool;
    use crate::models::{Availability, RosterRow};

    let user = crate::require_user(&session).await?;
    let entry_id = uuid::Uuid::parse_str(&entry_id)
        .map_err(|_| ServerFnError::new("Invalid roster entry id"))?;
    let availability = Availability::parse(&availability)
        .ok_or_else(|| ServerFnError::new("Unknown availability"))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<RosterRow> = sqlx::query_as("SELECT * FROM duty_roster WHERE id = $1")
        .bind(entry_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let row = row.ok_or_else(|| ServerFnError::new("Roster entry not found"))?;

    if !can_edit_availability(&user.full_name, &row.full_name) {
        return Err(ServerFnError::new("You can only answer for your own entries"));
    }

    let row: RosterRow = sqlx::query_as(
        "UPDATE duty_roster SET availability = $1 WHERE id = $2 RETURNING *",
    )
    .bind(availability.as_str())
    .bind(entry_id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "duty_roster")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/roster/availability")]
pub async fn set_roster_availability(
    entry_id: String,
    availability: String,
) -> Result<RosterEntryInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a roster entry. Only lineup managers may remove entries.
#[cfg(feature = "server")]
#[post("/api/roster/delete", session: tower_sessions::Session)]
pub async fn delete_roster_entry(entry_id: String) -> Result<(), ServerFnError> {
    use crate::auth::can_manage_lineup;
    use crate::db::get_pool;

    let user = crate::require_user(&session).await?;
    if !can_manage_lineup(user.role(), &user.ministry) {
        return Err(ServerFnError::new("Not allowed to manage the roster"));
    }

    let entry_id = uuid::Uuid::parse_str(&entry_id)
        .map_err(|_| ServerFnError::new("Invalid roster entry id"))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM duty_roster WHERE id = $1")
        .bind(entry_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "duty_roster")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/roster/delete")]
pub async fn delete_roster_entry(entry_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
