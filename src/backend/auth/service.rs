/**
 * Authentication Service
 *
 * Core business logic for the authentication system: signup, password
 * login, and Google login. Handlers stay thin; this service is the single
 * authority for "is this request authenticated, and as whom".
 *
 * Exactly one path authenticates a given attempt: `login` consults only the
 * stored password hash, `login_with_google` consults only the verified
 * assertion.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::google::GoogleTokenVerifier;
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{NewUser, User, UserStore};
use crate::shared::user::Role;

/// bcrypt work factor, fixed
const BCRYPT_COST: u32 = 10;

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 6;

/// Lowercase-normalize an email for storage and lookup
///
/// Signups differing only in case therefore collide, and logins are
/// case-insensitive on the email.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Orchestrates credential intake, verification, and token issuance
pub struct AuthService {
    users: Arc<dyn UserStore>,
    google: Option<Arc<GoogleTokenVerifier>>,
}

impl AuthService {
    /// Create a service over a user store, with Google login available only
    /// when a verifier is supplied
    pub fn new(users: Arc<dyn UserStore>, google: Option<Arc<GoogleTokenVerifier>>) -> Self {
        Self { users, google }
    }

    /// Register a new password-based account
    ///
    /// Validates the input, rejects a duplicate email, and stores a salted
    /// bcrypt hash. The plaintext password is never persisted.
    pub async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Uuid, AuthError> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(AuthError::Validation("Full name is required".to_string()));
        }

        let email = normalize_email(email);
        if !email.contains('@') {
            return Err(AuthError::Validation("Invalid email format".to_string()));
        }

        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            tracing::warn!("Signup rejected, email already registered: {}", email);
            return Err(AuthError::EmailTaken);
        }

        let password_hash = bcrypt::hash(password, BCRYPT_COST)?;

        let user = self
            .users
            .insert(NewUser {
                full_name: full_name.to_string(),
                email,
                password_hash: Some(password_hash),
                role,
            })
            .await
            .map_err(|e| match e {
                // The unique index can still fire between check and insert.
                crate::backend::auth::users::StoreError::DuplicateEmail => AuthError::EmailTaken,
                other => AuthError::Store(other),
            })?;

        tracing::info!("User created: {} ({})", user.id, user.email);
        Ok(user.id)
    }

    /// Authenticate with email and password, issuing a session token
    ///
    /// An account provisioned through Google login has no password hash and
    /// always fails this path with `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        let email = normalize_email(email);

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::NotFound)?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;

        if !bcrypt::verify(password, hash)? {
            tracing::warn!("Password mismatch for user: {}", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        let token = create_token(user.id, user.role)?;
        tracing::info!("User logged in: {} ({})", user.id, user.email);
        Ok((user, token))
    }

    /// Authenticate with a Google ID token, issuing a session token
    ///
    /// The assertion is verified against Google's trust root and the
    /// configured audience. A first login provisions a `user`-role account
    /// keyed by the asserted email; later logins reuse the existing row.
    pub async fn login_with_google(&self, assertion: &str) -> Result<(User, String), AuthError> {
        let verifier = self.google.as_ref().ok_or(AuthError::GoogleDisabled)?;
        let claims = verifier.verify(assertion).await?;

        let email = normalize_email(&claims.email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                let full_name = claims.name.clone().unwrap_or_else(|| email.clone());
                let user = self
                    .users
                    .insert(NewUser {
                        full_name,
                        email,
                        password_hash: None,
                        role: Role::User,
                    })
                    .await?;
                tracing::info!("Provisioned user from Google login: {} ({})", user.id, user.email);
                user
            }
        };

        let token = create_token(user.id, user.role)?;
        tracing::info!("Google login: {} ({})", user.id, user.email);
        Ok((user, token))
    }

    /// Fetch a user by ID
    ///
    /// Used by protected handlers after the middleware has resolved the
    /// principal.
    pub async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        Ok(self.users.find_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::principal_from_token;
    use crate::backend::auth::users::MemoryUserStore;

    fn service() -> AuthService {
        AuthService::new(Arc::new(MemoryUserStore::new()), None)
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let service = service();
        let user_id = service
            .signup("A B", "a@students.uonbi.ac.ke", "secret1", Role::User)
            .await
            .unwrap();

        let (user, token) = service
            .login("a@students.uonbi.ac.ke", "secret1")
            .await
            .unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.role, Role::User);
        assert!(!token.is_empty());

        let principal = principal_from_token(&token).unwrap();
        assert_eq!(principal.user_id, user_id);
        assert_eq!(principal.role, Role::User);
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let service = service();
        service
            .signup("A B", "a@example.com", "secret1", Role::User)
            .await
            .unwrap();

        let result = service
            .signup("C D", "a@example.com", "other-password", Role::User)
            .await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_signup_validation() {
        let service = service();

        let result = service.signup("", "a@example.com", "secret1", Role::User).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));

        let result = service.signup("A B", "not-an-email", "secret1", Role::User).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));

        let result = service.signup("A B", "a@example.com", "short", Role::User).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_email_is_normalized() {
        let service = service();
        service
            .signup("A B", "  A@Example.COM ", "secret1", Role::User)
            .await
            .unwrap();

        // Lookup normalizes the same way.
        let (user, _token) = service.login("a@example.com", "secret1").await.unwrap();
        assert_eq!(user.email, "a@example.com");

        // And a case-variant signup collides.
        let result = service
            .signup("C D", "a@EXAMPLE.com", "secret1", Role::User)
            .await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = service();
        service
            .signup("A B", "a@example.com", "secret1", Role::User)
            .await
            .unwrap();

        let result = service.login("a@example.com", "wrong-password").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let service = service();
        let result = service.login("x@nowhere.com", "secret1").await;
        assert!(matches!(result, Err(AuthError::NotFound)));
    }

    #[tokio::test]
    async fn test_admin_role_survives_to_token() {
        let service = service();
        service
            .signup("Ad Min", "admin@example.com", "secret1", Role::Admin)
            .await
            .unwrap();

        let (user, token) = service.login("admin@example.com", "secret1").await.unwrap();
        assert_eq!(user.role, Role::Admin);

        let principal = principal_from_token(&token).unwrap();
        assert_eq!(principal.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_google_login_disabled() {
        let service = service();
        let result = service.login_with_google("some-assertion").await;
        assert!(matches!(result, Err(AuthError::GoogleDisabled)));
    }
}
