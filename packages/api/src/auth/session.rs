//! Session keys and the rule for when a session may be granted.

/// Key for storing the user ID in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Gate between credential verification and session creation: an account
/// whose member profile row is missing is treated as invalid and never
/// receives a session.
pub fn require_member_profile<T>(profile: Option<T>) -> Result<T, &'static str> {
    profile.ok_or("Invalid account: no member profile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_profile_passes_through() {
        assert_eq!(require_member_profile(Some("row")), Ok("row"));
    }

    #[test]
    fn missing_profile_refuses_a_session() {
        let err = require_member_profile::<&str>(None).unwrap_err();
        assert!(err.starts_with("Invalid account"));
    }
}
