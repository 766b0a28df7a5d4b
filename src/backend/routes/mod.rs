//! Route Configuration Module
//!
//! HTTP route configuration for the backend server.
//!
//! # Routes
//!
//! - `POST /signup` - User registration
//! - `POST /login` - Password login
//! - `POST /google-login` - Google ID-token login
//! - `GET /me` - Current principal (protected)
//!
//! Unknown routes fall through to a plain 404.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
