/**
 * Server Configuration
 *
 * Loading and validation of server configuration from the environment.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * Without `DATABASE_URL` the server falls back to an in-memory user store;
 * without `GOOGLE_CLIENT_ID` the Google login endpoint answers 503.
 */

use std::sync::Arc;

use sqlx::PgPool;

use crate::backend::auth::google::GoogleTokenVerifier;
use crate::backend::auth::users::{MemoryUserStore, PostgresUserStore, UserStore};

/// Load the user store
///
/// Reads `DATABASE_URL`, connects a PostgreSQL pool, and runs migrations.
/// Any failure degrades to the in-memory store so a development checkout
/// runs with no setup; accounts then do not survive a restart.
pub async fn load_user_store() -> Arc<dyn UserStore> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, using in-memory user store");
            return Arc::new(MemoryUserStore::new());
        }
    };

    tracing::info!("Connecting to database...");
    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory user store");
            return Arc::new(MemoryUserStore::new());
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // Migrations may already have been applied by an earlier run.
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations");
        }
    }

    Arc::new(PostgresUserStore::new(pool))
}

/// Load the Google ID-token verifier
///
/// Returns `None` when `GOOGLE_CLIENT_ID` is not set, which disables the
/// `/google-login` endpoint.
pub fn load_google_verifier() -> Option<Arc<GoogleTokenVerifier>> {
    match std::env::var("GOOGLE_CLIENT_ID") {
        Ok(client_id) if !client_id.is_empty() => {
            tracing::info!("Google login enabled");
            Some(Arc::new(GoogleTokenVerifier::new(client_id)))
        }
        _ => {
            tracing::warn!("GOOGLE_CLIENT_ID not set, Google login disabled");
            None
        }
    }
}
