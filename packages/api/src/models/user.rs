//! # Member profile model
//!
//! Two representations of a Flock member:
//!
//! - [`User`] (server only) — the complete `users` row, loaded directly from
//!   queries via [`sqlx::FromRow`]. `id` doubles as the foreign key into
//!   `accounts`, where the credentials live. [`User::to_info`] projects it
//!   into the DTO.
//! - [`UserInfo`] — the client-safe subset that crosses the server/client
//!   boundary. Converts the `Uuid` to a `String` so it works in WASM.
//!   Carries no secrets; the password hash never leaves the `accounts` table.

use serde::{Deserialize, Serialize};

use crate::auth::Role;

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full profile record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub ministry: String,
    pub role: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            ministry: self.ministry.clone(),
            role: Role::parse(&self.role),
            phone: self.phone.clone(),
            address: self.address.clone(),
            birth_date: self.birth_date.clone(),
            age: self.age,
            avatar_url: self.avatar_url.clone(),
        }
    }

    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

/// Member information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub ministry: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub age: Option<i32>,
    pub avatar_url: Option<String>,
}

impl UserInfo {
    /// First letter of the member's name, for avatar placeholders.
    pub fn initial(&self) -> char {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}
