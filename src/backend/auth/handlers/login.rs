/**
 * Login Handler
 *
 * POST /login - authenticates an email/password pair and issues a session
 * token.
 *
 * # Security Notes
 *
 * - Unknown email and wrong password produce the same 400 response, so the
 *   endpoint does not reveal whether an email is registered
 * - The returned user is sanitized; the password hash never leaves the
 *   service layer
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::service::AuthService;
use crate::shared::api::{LoginRequest, LoginResponse};

/// Login handler
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    tracing::info!("Login request for email: {}", request.email);

    let (user, token) = auth.login(&request.email, &request.password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: user.profile(),
        token,
    }))
}
