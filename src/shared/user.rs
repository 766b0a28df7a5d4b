/**
 * Role and User Profile
 *
 * The access tier enumeration and the sanitized view of a user that is safe
 * to send to clients and to cache on the device.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access tier of a user account.
///
/// `Admin` is the sole signal that gates the administrative surface; there
/// is no separate permission list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary user, routed to the home surface
    #[default]
    User,
    /// Administrator, routed to the admin surface
    Admin,
}

impl Role {
    /// The wire/database representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parse a role from its wire/database representation
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User information without sensitive data
///
/// This is the only user shape that leaves the server and the only one the
/// client persists. It never contains the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user ID
    pub id: Uuid,
    /// Display name collected at signup
    pub full_name: String,
    /// Login email
    pub email: String,
    /// Access tier
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse(Role::User.as_str()), Some(Role::User));
        assert_eq!(Role::parse(Role::Admin.as_str()), Some(Role::Admin));
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_user_profile_serialization() {
        let profile = UserProfile {
            id: Uuid::new_v4(),
            full_name: "A B".to_string(),
            email: "a@example.com".to_string(),
            role: Role::User,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(!json.contains("password"));
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
