/**
 * Authentication Middleware
 *
 * Middleware protecting routes that require an authenticated principal. It
 * extracts the bearer token from the Authorization header, verifies it, and
 * attaches the resolved `Principal` to the request extensions.
 *
 * Verification is pure: a signature and expiry check, no store access. A
 * missing, malformed, invalid, or expired token is rejected with 403 before
 * the protected handler runs.
 */

use axum::{
    extract::{FromRequestParts, Request},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::sessions::{principal_from_token, Principal};

/// Authentication middleware
///
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Verifies signature and expiry
/// 3. Attaches the `Principal` to request extensions for handlers
pub async fn require_auth(mut request: Request, next: Next) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::TokenMissing
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Malformed Authorization header");
        AuthError::TokenInvalid
    })?;

    let principal = principal_from_token(token)?;

    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated principal
///
/// Usable as a handler parameter on any route behind `require_auth`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let principal = parts.extensions.get::<Principal>().copied().ok_or_else(|| {
            tracing::warn!("Principal not found in request extensions");
            AuthError::TokenMissing
        })?;

        Ok(AuthUser(principal))
    }
}
