/**
 * Auth Error Types
 *
 * The error taxonomy of the authentication core and its conversion to HTTP
 * responses.
 *
 * # HTTP mapping
 *
 * - Validation failures (including a duplicate email) surface as 400 with an
 *   `error` body field, matching the signup contract.
 * - Login failures surface as 400 with one non-specific `message` for both
 *   the unknown-email and wrong-password cases, so the response does not
 *   reveal whether an email is registered.
 * - Assertion failures surface as 401, token failures on protected routes
 *   as 403, and internal failures as 500 with the cause logged but never
 *   echoed to the caller.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::backend::auth::users::StoreError;

/// Errors produced by the authentication core
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed signup input
    #[error("{0}")]
    Validation(String),

    /// Signup with an email that is already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Login email matches no account
    #[error("user not found")]
    NotFound,

    /// Password verification failed, or the account has no password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Google ID-token verification failed
    #[error("invalid identity assertion: {0}")]
    InvalidAssertion(String),

    /// Session token expired
    #[error("token expired")]
    TokenExpired,

    /// Session token has a bad signature or malformed payload
    #[error("token invalid")]
    TokenInvalid,

    /// No token was presented on a protected route
    #[error("token required")]
    TokenMissing,

    /// Google login requested but no client ID is configured
    #[error("google login is not configured")]
    GoogleDisabled,

    /// User store failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Session-token signing failure
    #[error("token signing error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// The HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::EmailTaken => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::InvalidAssertion(_) => StatusCode::UNAUTHORIZED,
            Self::TokenExpired | Self::TokenInvalid | Self::TokenMissing => StatusCode::FORBIDDEN,
            Self::GoogleDisabled => StatusCode::SERVICE_UNAVAILABLE,
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed to the caller
    ///
    /// Login failures collapse to one string; internal causes are replaced
    /// wholesale.
    fn public_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::EmailTaken => "Email already registered".to_string(),
            Self::NotFound | Self::InvalidCredentials => "Invalid email or password".to_string(),
            Self::InvalidAssertion(_) => "Invalid Google token".to_string(),
            Self::TokenExpired | Self::TokenInvalid => "Token is not valid".to_string(),
            Self::TokenMissing => "Token is required".to_string(),
            Self::GoogleDisabled => "Google login is not configured".to_string(),
            Self::Store(_) | Self::Hash(_) | Self::Token(_) => "Server error".to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Internal auth failure: {:?}", self);
        } else {
            tracing::warn!("Auth request rejected: {}", self);
        }

        // The signup contract reports validation failures under `error`;
        // every other failure uses `message`.
        let body = match &self {
            Self::Validation(_) | Self::EmailTaken => {
                serde_json::json!({ "error": self.public_message() })
            }
            _ => serde_json::json!({ "message": self.public_message() }),
        };

        (status, Json(body)).into_response()
    }
}
