/**
 * User Model and Persistence
 *
 * This module defines the user record, the `UserStore` collaborator
 * interface, and its two implementations: PostgreSQL (sqlx) for deployments
 * and an in-memory map used when no database is configured and by tests.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::user::{Role, UserProfile};

/// A user account as stored by the backend
///
/// `password_hash` is `None` for accounts provisioned through Google login;
/// such accounts cannot authenticate with a password.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Display name collected at signup (or taken from the Google profile)
    pub full_name: String,
    /// Login email, stored lowercase
    pub email: String,
    /// bcrypt hash, present only for password-based accounts
    pub password_hash: Option<String>,
    /// Access tier
    pub role: Role,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The sanitized view of this user, safe to return to clients
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// Fields required to create a user row
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: Role,
}

/// Errors surfaced by a user store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email is already registered
    #[error("email already registered")]
    DuplicateEmail,

    /// A stored role value could not be parsed
    #[error("invalid role value in store: {0}")]
    InvalidRole(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence interface for user accounts
///
/// Lookups take emails already normalized by the caller; implementations do
/// exact matching. Insertion must reject a duplicate email with
/// `StoreError::DuplicateEmail`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the stored row
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Look up a user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

/// Database row shape for `users`
///
/// The role is kept as text in the table and parsed on the way out.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    full_name: String,
    email: String,
    password_hash: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role).ok_or_else(|| StoreError::InvalidRole(row.role.clone()))?;
        Ok(User {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            password_hash: row.password_hash,
            role,
            created_at: row.created_at,
        })
    }
}

/// PostgreSQL-backed user store
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, full_name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, full_name, email, password_hash, role, created_at
            "#,
        )
        .bind(id)
        .bind(&new_user.full_name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) => {
                StoreError::DuplicateEmail
            }
            _ => StoreError::Database(e),
        })?;

        row.try_into()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, email, password_hash, role, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }
}

/// In-memory user store
///
/// Used when `DATABASE_URL` is not configured, keeping the server usable in
/// development, and by the test suite. Accounts do not survive a restart.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            full_name: new_user.full_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: Utc::now(),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}
