//! Authentication support: password hashing, session keys, and the
//! ministry/role guard rules shared between server enforcement and client
//! display gating.

#[cfg(feature = "server")]
mod password;
mod roles;
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
pub use roles::{
    can_edit_availability, can_manage_lifegroups, can_manage_lineup, Role, MINISTRIES,
    MINISTRY_LIFEGROUP_LEADER, MINISTRY_PASTORS, TEAM_ROLES,
};
pub use session::{require_member_profile, SESSION_USER_ID_KEY};
