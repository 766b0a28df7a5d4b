//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints. Handlers are thin
//! adapters: they extract the request, call into `AuthService`, and shape
//! the response; every failure path is an `AuthError` converting to its
//! HTTP form.
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /login - Password authentication
//! - **`google_login`** - POST /google-login - Google ID-token authentication
//! - **`get_me`** - GET /me - Current principal's profile (protected)
//!
//! The request/response bodies live in `crate::shared::api` because the
//! client consumes the same types.

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Google login handler
pub mod google_login;

/// Get current user handler
pub mod me;

pub use google_login::google_login;
pub use login::login;
pub use me::get_me;
pub use signup::signup;
