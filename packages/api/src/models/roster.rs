//! Duty roster models.
//!
//! A roster entry names a member (denormalized display name, not a foreign
//! key), a team role from the instrument vocabulary, a service date, and a
//! tri-state availability the named member flips themselves.

use serde::{Deserialize, Serialize};

/// Availability of a rostered member for a service date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    Pending,
    Available,
    Unavailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Pending => "Pending",
            Availability::Available => "Available",
            Availability::Unavailable => "Unavailable",
        }
    }

    pub fn parse(s: &str) -> Option<Availability> {
        match s {
            "Pending" => Some(Availability::Pending),
            "Available" => Some(Availability::Available),
            "Unavailable" => Some(Availability::Unavailable),
            _ => None,
        }
    }
}

/// A duty roster entry as rendered by the screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntryInfo {
    pub id: String,
    pub full_name: String,
    pub role: String,
    pub availability: Availability,
    /// ISO date (`YYYY-MM-DD`).
    pub service_date: String,
    pub created_at: String,
}

impl liststate::HasId for RosterEntryInfo {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Full row from the `duty_roster` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RosterRow {
    pub id: uuid::Uuid,
    pub full_name: String,
    pub role: String,
    pub availability: String,
    pub service_date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(feature = "server")]
impl RosterRow {
    pub fn to_info(&self) -> RosterEntryInfo {
        RosterEntryInfo {
            id: self.id.to_string(),
            full_name: self.full_name.clone(),
            role: self.role.clone(),
            availability: Availability::parse(&self.availability)
                .unwrap_or(Availability::Pending),
            service_date: self.service_date.format("%Y-%m-%d").to_string(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_labels_round_trip() {
        for a in [
            Availability::Pending,
            Availability::Available,
            Availability::Unavailable,
        ] {
            assert_eq!(Availability::parse(a.as_str()), Some(a));
        }
        assert_eq!(Availability::parse("Busy"), None);
    }
}
