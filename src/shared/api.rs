/**
 * Authentication Wire Types
 *
 * Request and response bodies for the authentication endpoints. The field
 * names follow the HTTP contract: snake_case for request fields collected by
 * the signup/login forms, and `userId` in the signup response.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::user::{Role, UserProfile};

fn default_role() -> Role {
    Role::User
}

/// Sign up request
///
/// Contains the profile fields and password for user registration. The role
/// defaults to `user` when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// User's display name
    pub full_name: String,
    /// User's email address (lowercase-normalized by the server)
    pub email: String,
    /// User's password (hashed before storage, never persisted as-is)
    pub password: String,
    /// Requested access tier, `user` unless specified
    #[serde(default = "default_role")]
    pub role: Role,
}

/// Sign up response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    /// Human-readable confirmation
    pub message: String,
    /// ID of the freshly created user
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Password to verify against the stored hash
    pub password: String,
}

/// Login response
///
/// Returned by a successful password login. Contains the session token and
/// the sanitized user for the client to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Sanitized user (no password hash)
    pub user: UserProfile,
    /// Session token (1-hour expiry)
    pub token: String,
}

/// Google login request
///
/// Carries the ID token minted by Google Sign-In on the device. When an
/// assertion is present it is the only credential consulted; password fields
/// in the same request are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    /// Google-issued ID token
    pub token: String,
}

/// Reduced user shape returned by the Google login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleUserSummary {
    /// Unique user ID
    pub id: Uuid,
    /// Login email
    pub email: String,
    /// Access tier
    pub role: Role,
}

/// Google login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleLoginResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Session token (1-hour expiry)
    pub token: String,
    /// Reduced user shape
    pub user: GoogleUserSummary,
}
