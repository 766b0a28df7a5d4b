/**
 * Google Login Handler
 *
 * POST /google-login - authenticates a Google-issued ID token. The
 * assertion is the only credential consulted on this path; password fields
 * in the same request body are never read.
 *
 * # Responses
 *
 * - `200 OK` with `{message, token, user: {id, email, role}}`
 * - `401 Unauthorized` when assertion verification fails
 * - `503 Service Unavailable` when no Google client ID is configured
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::service::AuthService;
use crate::shared::api::{GoogleLoginRequest, GoogleLoginResponse, GoogleUserSummary};

/// Google login handler
pub async fn google_login(
    State(auth): State<Arc<AuthService>>,
    Json(request): Json<GoogleLoginRequest>,
) -> Result<Json<GoogleLoginResponse>, AuthError> {
    tracing::info!("Google login request");

    let (user, token) = auth.login_with_google(&request.token).await?;

    Ok(Json(GoogleLoginResponse {
        message: "Login successful".to_string(),
        token,
        user: GoogleUserSummary {
            id: user.id,
            email: user.email,
            role: user.role,
        },
    }))
}
