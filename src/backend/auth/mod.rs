//! Authentication Module
//!
//! This module handles user accounts, credential verification, and session
//! tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User model and the `UserStore` persistence interface
//! - **`sessions`** - Session-token issuance and verification
//! - **`google`** - Google ID-token verification (separate trust root)
//! - **`service`** - The `AuthService` orchestrator
//! - **`error`** - Error taxonomy and HTTP conversion
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: full name, email, password → bcrypt hash → user row
//! 2. **Login**: email, password → hash comparison → session token
//! 3. **Google login**: ID token → JWKS verification → lookup or provision
//!    → session token
//! 4. **Protected requests**: `Authorization: Bearer` → middleware
//!    verification → principal in request extensions
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (work factor 10) before storage
//! - Session tokens are stateless HS256 JWTs with a one-hour expiry
//! - Login failures do not reveal whether an email is registered
//! - The Google path and the local issuer share no signing material

/// User model and persistence
pub mod users;

/// Session-token issuance and verification
pub mod sessions;

/// Google ID-token verification
pub mod google;

/// Authentication orchestration
pub mod service;

/// Error taxonomy
pub mod error;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use error::AuthError;
pub use handlers::{get_me, google_login, login, signup};
pub use service::AuthService;
