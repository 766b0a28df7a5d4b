/**
 * Get Current User Handler
 *
 * GET /me - returns the sanitized profile of the authenticated principal.
 * The verification middleware runs first; this handler only sees requests
 * carrying a valid bearer token.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::service::AuthService;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::user::UserProfile;

/// Get current user handler
///
/// A principal whose row no longer exists is treated like an invalid token;
/// the client reacts by returning to the unauthenticated state.
pub async fn get_me(
    State(auth): State<Arc<AuthService>>,
    AuthUser(principal): AuthUser,
) -> Result<Json<UserProfile>, AuthError> {
    let user = auth
        .user_by_id(principal.user_id)
        .await?
        .ok_or(AuthError::TokenInvalid)?;

    Ok(Json(user.profile()))
}
