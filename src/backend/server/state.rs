/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementation that lets handlers extract the auth service directly.
 *
 * # Thread Safety
 *
 * The state is a cheap clone: the service is behind `Arc` and holds no
 * interior mutability beyond the stores' own synchronization.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// The single authority for authentication decisions
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }
}

/// Allow handlers to take `State<Arc<AuthService>>` without the whole
/// `AppState`
impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
