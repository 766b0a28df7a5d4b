//! Backend Module
//!
//! Server-side code for the Motalk authentication backend: an Axum HTTP
//! server exposing signup, login, Google login, and the protected `/me`
//! endpoint.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, session tokens, Google verification, handlers
//! - **`middleware`** - Bearer-token verification for protected routes
//!
//! # State Management
//!
//! All handlers share one `AppState` holding the `AuthService` behind an
//! `Arc`. Requests are independent; the only synchronization lives inside
//! the user store implementations.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, AuthError>`; the error converts to a JSON
//! response with the status mapping described in `auth::error`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use auth::{AuthError, AuthService};
pub use server::create_app;
