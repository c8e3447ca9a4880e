//! Ministry and role vocabulary, and the guard rules derived from them.
//!
//! The same predicates run in two places: server functions enforce them on
//! every mutation, and screens use them to hide affordances the member could
//! not exercise anyway. The client-side check is cosmetic; the server-side
//! one is authoritative.

use serde::{Deserialize, Serialize};

/// Ministry labels a member can carry.
pub const MINISTRIES: [&str; 6] = [
    "Singer",
    "Musician",
    "Multimedia",
    "Backstage",
    "Ptr's",
    "LifeGroup Leader",
];

/// Worship-team duty roles.
pub const TEAM_ROLES: [&str; 7] = [
    "Worship Leader",
    "Keyboardist",
    "Lead Guitarist",
    "Acoustic Guitarist",
    "Bassist",
    "Drummer",
    "Vocalist",
];

pub const MINISTRY_PASTORS: &str = "Ptr's";
pub const MINISTRY_LIFEGROUP_LEADER: &str = "LifeGroup Leader";

/// Coarse authorization level stored on the profile row. Replaces the old
/// hardcoded admin email allow-list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Member,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    /// Unknown labels fall back to the least-privileged role.
    pub fn parse(s: &str) -> Role {
        match s {
            "admin" => Role::Admin,
            _ => Role::Member,
        }
    }
}

/// May this member add to or remove from the duty roster?
pub fn can_manage_lineup(role: Role, ministry: &str) -> bool {
    role == Role::Admin || ministry == MINISTRY_PASTORS
}

/// May this member create or delete life group logs and attendance rows?
pub fn can_manage_lifegroups(role: Role, ministry: &str) -> bool {
    role == Role::Admin || ministry == MINISTRY_LIFEGROUP_LEADER
}

/// Only the member a roster entry names may change its availability.
pub fn can_edit_availability(profile_full_name: &str, entry_full_name: &str) -> bool {
    profile_full_name == entry_full_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pastors_and_admins_manage_the_lineup() {
        assert!(can_manage_lineup(Role::Member, "Ptr's"));
        assert!(can_manage_lineup(Role::Admin, "Singer"));
        assert!(!can_manage_lineup(Role::Member, "Singer"));
        assert!(!can_manage_lineup(Role::Member, "Musician"));
    }

    #[test]
    fn lifegroup_leaders_manage_lifegroups() {
        assert!(can_manage_lifegroups(Role::Member, "LifeGroup Leader"));
        assert!(can_manage_lifegroups(Role::Admin, "Backstage"));
        assert!(!can_manage_lifegroups(Role::Member, "Ptr's"));
    }

    #[test]
    fn availability_is_self_service_only() {
        assert!(can_edit_availability("John Smith", "John Smith"));
        assert!(!can_edit_availability("Jane Doe", "John Smith"));
    }

    #[test]
    fn unknown_role_labels_degrade_to_member() {
        assert_eq!(Role::parse("superuser"), Role::Member);
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse(Role::Admin.as_str()), Role::Admin);
    }
}
