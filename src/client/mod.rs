//! Client Module
//!
//! The client-side half of the authentication flow, UI excluded: screens
//! collect credentials and render surfaces, but everything that decides
//! *whether* and *as whom* the app is authenticated lives here.
//!
//! # Architecture
//!
//! - **`config`** - Where the API lives
//! - **`api`** - HTTP client for the auth endpoints
//! - **`credentials`** - Durable token + user persistence
//! - **`session`** - The state machine routing to the user or admin surface
//!
//! # Flow
//!
//! 1. `Session::restore` at startup re-enters an authenticated state from
//!    persisted credentials
//! 2. `begin_login` then `AuthClient::login` (or `login_with_google`)
//! 3. `complete_login` persists the token and routes by role
//! 4. A 403 from any authenticated request feeds `handle_expiry`, which
//!    clears credentials and returns to the login surface

/// Client configuration
pub mod config;

/// HTTP API client
pub mod api;

/// Credential persistence
pub mod credentials;

/// Session state machine
pub mod session;

pub use api::{ApiError, AuthClient};
pub use config::ClientConfig;
pub use credentials::CredentialStore;
pub use session::{Session, SessionState, Surface};
