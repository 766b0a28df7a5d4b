/**
 * Signup Handler
 *
 * POST /signup - registers a password-based account.
 *
 * # Responses
 *
 * - `201 Created` with `{message, userId}` on success
 * - `400 Bad Request` with `{error}` on malformed input or a duplicate email
 * - `500 Internal Server Error` on hashing or store failure
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::service::AuthService;
use crate::shared::api::{SignupRequest, SignupResponse};

/// Sign up handler
///
/// Delegates validation, duplicate detection, and hashing to the service;
/// responds `201` with the new user's ID.
pub async fn signup(
    State(auth): State<Arc<AuthService>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AuthError> {
    tracing::info!("Signup request for email: {}", request.email);

    let user_id = auth
        .signup(&request.full_name, &request.email, &request.password, request.role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".to_string(),
            user_id,
        }),
    ))
}
