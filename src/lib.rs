//! Motalk - Main Library
//!
//! Motalk is the authentication core of a social news application: an Axum
//! backend that registers users, verifies credentials, and issues session
//! tokens, together with the client-side session flow that persists those
//! tokens and routes the app to the right surface.
//!
//! # Overview
//!
//! This library provides:
//! - User registration and password login backed by bcrypt and PostgreSQL
//! - Stateless JWT session tokens with a fixed one-hour expiry
//! - Google ID-token login with first-login account provisioning
//! - A bearer-token verification middleware for protected endpoints
//! - A client credential store and session state machine
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the client and the backend
//!   - The `Role` enum, sanitized user profile, request/response bodies
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with the `/signup`, `/login`, `/google-login`, and
//!     `/me` endpoints
//!   - Session-token issuance and verification
//!   - Google identity-assertion verification against Google's JWKS
//!   - User persistence (PostgreSQL via sqlx, in-memory fallback)
//!
//! - **`client`** - Client-side auth flow (no UI)
//!   - HTTP API client for the auth endpoints
//!   - Durable credential store (token + cached user)
//!   - Session state machine selecting the user or admin surface
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use motalk::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Serve `app` with axum
//! # }
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use motalk::client::{api::AuthClient, config::ClientConfig, session::Session};
//! use motalk::client::credentials::CredentialStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AuthClient::new(ClientConfig::new());
//! let store = CredentialStore::open()?;
//! let mut session = Session::restore(store)?;
//!
//! session.begin_login();
//! let response = client.login("a@example.com", "secret1").await?;
//! session.complete_login(response.user, response.token)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - Custom error types in `backend::auth::error` and the client modules
//! - Server errors convert to JSON HTTP responses via `IntoResponse`

/// Types shared between the client and the backend
pub mod shared;

/// Backend server-side code
pub mod backend;

/// Client-side authentication flow
pub mod client;
