/**
 * API Route Handlers
 *
 * Route definitions for the authentication endpoints.
 *
 * # Routes
 *
 * ## Public
 * - `POST /signup` - User registration
 * - `POST /login` - Password login
 * - `POST /google-login` - Google ID-token login
 *
 * ## Protected
 * - `GET /me` - Current principal's profile (bearer token required)
 */

use axum::{middleware, Router};

use crate::backend::auth::{get_me, google_login, login, signup};
use crate::backend::middleware::auth::require_auth;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Public endpoints are registered directly; `/me` sits behind the
/// verification middleware, which rejects missing or invalid tokens with
/// 403 before the handler runs.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", axum::routing::get(get_me))
        .route_layer(middleware::from_fn(require_auth));

    router
        .route("/signup", axum::routing::post(signup))
        .route("/login", axum::routing::post(login))
        .route("/google-login", axum::routing::post(google_login))
        .merge(protected)
}
