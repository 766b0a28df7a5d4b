//! Shared Types
//!
//! This module defines the types that cross the client/server boundary:
//! the role enumeration, the sanitized user profile, and the request and
//! response bodies of the authentication endpoints.
//!
//! Nothing in this module touches a database or an HTTP stack; both sides
//! serialize these types with serde.

/// Role and sanitized user profile
pub mod user;

/// Request and response bodies for the auth endpoints
pub mod api;

pub use api::{
    GoogleLoginRequest, GoogleLoginResponse, GoogleUserSummary, LoginRequest, LoginResponse,
    SignupRequest, SignupResponse,
};
pub use user::{Role, UserProfile};
