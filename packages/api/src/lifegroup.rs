//! Server functions for life group logs and their attendee lists.

use dioxus::prelude::*;

use crate::models::{LifeGroupInfo, LifeGroupMemberInfo};

/// List life group logs, newest first, each with its attendee count.
#[cfg(feature = "server")]
#[get("/api/lifegroups")]
pub async fn list_lifegroups() -> Result<Vec<LifeGroupInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::LifeGroupRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<LifeGroupRow> = sqlx::query_as(
        "SELECT g.id, g.group_name, g.leader_name, g.description, g.created_at,
                COUNT(m.id) AS member_count
         FROM lifegroup_updates g
         LEFT JOIN lifegroup_members m ON m.group_id = g.id
         GROUP BY g.id
         ORDER BY g.created_at DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(LifeGroupRow::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/lifegroups")]
pub async fn list_lifegroups() -> Result<Vec<LifeGroupInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a life group log. Only life group managers may create logs.
#[cfg(feature = "server")]
#[post("/api/lifegroups", session: tower_sessions::Session)]
pub async fn create_lifegroup(
    group_name: String,
    leader_name: String,
    agenda: String,
) -> Result<LifeGroupInfo, ServerFnError> {
    use crate::auth::can_manage_lifegroups;
    use crate::db::get_pool;

    let user = crate::require_user(&session).await?;
    if !can_manage_lifegroups(user.role(), &user.ministry) {
        return Err(ServerFnError::new("Not allowed to manage life groups"));
    }

    let group_name = group_name.trim().to_string();
    let leader_name = leader_name.trim().to_string();
    if group_name.is_empty() || leader_name.is_empty() {
        return Err(ServerFnError::new("Group name and leader are required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (id, created_at): (uuid::Uuid, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
        "INSERT INTO lifegroup_updates (group_name, leader_name, description)
         VALUES ($1, $2, $3)
         RETURNING id, created_at",
    )
    .bind(&group_name)
    .bind(&leader_name)
    .bind(agenda.trim())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "lifegroup_updates")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(%group_name, "life group log created");
    Ok(LifeGroupInfo {
        id: id.to_string(),
        group_name,
        leader_name,
        agenda: agenda.trim().to_string(),
        member_count: 0,
        created_at: created_at.to_rfc3339(),
    })
}

#[cfg(not(feature = "server"))]
#[post("/api/lifegroups")]
pub async fn create_lifegroup(
    group_name: String,
    leader_name: String,
    agenda: String,
) -> Result<LifeGroupInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a life group log and its attendee rows. Only life group managers
/// may delete logs.
#[cfg(feature = "server")]
#[post("/api/lifegroups/delete", session: tower_sessions::Session)]
pub async fn delete_lifegroup(group_id: String) -> Result<(), ServerFnError> {
    use crate::auth::can_manage_lifegroups;
    use crate::db::get_pool;

    let user = crate::require_user(&session).await?;
    if !can_manage_lifegroups(user.role(), &user.ministry) {
        return Err(ServerFnError::new("Not allowed to manage life groups"));
    }

    let group_id = uuid::Uuid::parse_str(&group_id)
        .map_err(|_| ServerFnError::new("Invalid life group id"))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Attendee rows go with the log via ON DELETE CASCADE.
    sqlx::query("DELETE FROM lifegroup_updates WHERE id = $1")
        .bind(group_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "lifegroup_updates")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/lifegroups/delete")]
pub async fn delete_lifegroup(group_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the attendees recorded on one life group log.
#[cfg(feature = "server")]
#[get("/api/lifegroups/members")]
pub async fn list_lifegroup_members(
    group_id: String,
) -> Result<Vec<LifeGroupMemberInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::LifeGroupMemberRow;

    let group_id = uuid::Uuid::parse_str(&group_id)
        .map_err(|_| ServerFnError::new("Invalid life group id"))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<LifeGroupMemberRow> = sqlx::query_as(
        "SELECT * FROM lifegroup_members WHERE group_id = $1 ORDER BY created_at ASC",
    )
    .bind(group_id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(LifeGroupMemberRow::to_info).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/lifegroups/members")]
pub async fn list_lifegroup_members(
    group_id: String,
) -> Result<Vec<LifeGroupMemberInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Record an attendee on a life group log. Only life group managers may
/// record attendance.
#[cfg(feature = "server")]
#[post("/api/lifegroups/members", session: tower_sessions::Session)]
pub async fn add_lifegroup_member(
    group_id: String,
    full_name: String,
) -> Result<LifeGroupMemberInfo, ServerFnError> {
    use crate::auth::can_manage_lifegroups;
    use crate::db::get_pool;
    use crate::models::LifeGroupMemberRow;

    let user = crate::require_user(&session).await?;
    if !can_manage_lifegroups(user.role(), &user.ministry) {
        return Err(ServerFnError::new("Not allowed to manage life groups"));
    }

    let group_id = uuid::Uuid::parse_str(&group_id)
        .map_err(|_| ServerFnError::new("Invalid life group id"))?;
    let full_name = full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(ServerFnError::new("Attendee name is required"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: LifeGroupMemberRow = sqlx::query_as(
        "INSERT INTO lifegroup_members (group_id, full_name)
         VALUES ($1, $2)
         RETURNING *",
    )
    .bind(group_id)
    .bind(&full_name)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "lifegroup_members")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/lifegroups/members")]
pub async fn add_lifegroup_member(
    group_id: String,
    full_name: String,
) -> Result<LifeGroupMemberInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove an attendee row from a life group log. Only life group managers
/// may remove attendees.
#[cfg(feature = "server")]
#[post("/api/lifegroups/members/remove", session: tower_sessions::Session)]
pub async fn remove_lifegroup_member(member_id: String) -> Result<(), ServerFnError> {
    use crate::auth::can_manage_lifegroups;
    use crate::db::get_pool;

    let user = crate::require_user(&session).await?;
    if !can_manage_lifegroups(user.role(), &user.ministry) {
        return Err(ServerFnError::new("Not allowed to manage life groups"));
    }

    let member_id = uuid::Uuid::parse_str(&member_id)
        .map_err(|_| ServerFnError::new("Invalid attendee id"))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM lifegroup_members WHERE id = $1")
        .bind(member_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    crate::revision::bump(pool, "lifegroup_members")
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/lifegroups/members/remove")]
pub async fn remove_lifegroup_member(member_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
