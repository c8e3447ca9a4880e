//! Life group models: a log entry (group, leader, agenda) and its attendee
//! rows, a one-to-many pair.

use serde::{Deserialize, Serialize};

/// A life group log with its attendee count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeGroupInfo {
    pub id: String,
    pub group_name: String,
    pub leader_name: String,
    pub agenda: String,
    pub member_count: i64,
    pub created_at: String,
}

impl liststate::HasId for LifeGroupInfo {
    fn id(&self) -> &str {
        &self.id
    }
}

/// An attendee row inside a life group log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeGroupMemberInfo {
    pub id: String,
    pub group_id: String,
    pub full_name: String,
}

impl liststate::HasId for LifeGroupMemberInfo {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `lifegroup_updates` row joined with its member count.
#[cfg(feature = "server")]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LifeGroupRow {
    pub id: uuid::Uuid,
    pub group_name: String,
    pub leader_name: String,
    pub description: String,
    pub member_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(feature = "server")]
impl LifeGroupRow {
    pub fn to_info(&self) -> LifeGroupInfo {
        LifeGroupInfo {
            id: self.id.to_string(),
            group_name: self.group_name.clone(),
            leader_name: self.leader_name.clone(),
            agenda: self.description.clone(),
            member_count: self.member_count,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// `lifegroup_members` row.
#[cfg(feature = "server")]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LifeGroupMemberRow {
    pub id: uuid::Uuid,
    pub group_id: uuid::Uuid,
    pub full_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(feature = "server")]
impl LifeGroupMemberRow {
    pub fn to_info(&self) -> LifeGroupMemberInfo {
        LifeGroupMemberInfo {
            id: self.id.to_string(),
            group_id: self.group_id.to_string(),
            full_name: self.full_name.clone(),
        }
    }
}
