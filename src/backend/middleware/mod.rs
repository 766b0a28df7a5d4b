//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently provides:
//!
//! - **`auth`** - Bearer-token verification for protected routes

pub mod auth;

pub use auth::{require_auth, AuthUser};
