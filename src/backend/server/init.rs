/**
 * Server Initialization
 *
 * Assembly of the Axum application: configuration loading, state creation,
 * and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the user store (PostgreSQL, or in-memory fallback)
 * 2. Load the Google verifier if a client ID is configured
 * 3. Build the auth service and application state
 * 4. Create the router with all routes and layers
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::service::AuthService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_google_verifier, load_user_store};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// The function is resilient: a missing database or Google client ID is
/// logged and degrades the corresponding feature instead of aborting.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing Motalk backend server");

    let users = load_user_store().await;
    let google = load_google_verifier();

    let auth = Arc::new(AuthService::new(users, google));
    let app_state = AppState::new(auth);

    create_router(app_state)
}
