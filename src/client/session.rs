/**
 * Session State Machine
 *
 * The client-side routing guard. A `Session` is an explicit context object
 * owning the authentication state, the cached user, and the credential
 * store; it is passed to the navigation and request layers instead of
 * living in a global.
 *
 * States: `Unauthenticated -> Authenticating -> {AuthenticatedUser,
 * AuthenticatedAdmin}`, returning to `Unauthenticated` only on explicit
 * logout or on detecting token expiry, never spontaneously.
 */

use thiserror::Error;

use crate::client::credentials::{CredentialStore, CredentialStoreError};
use crate::shared::user::{Role, UserProfile};

/// Authentication state of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session; the login surface is shown
    Unauthenticated,
    /// Credentials submitted, response pending
    Authenticating,
    /// Authenticated with an ordinary user role
    AuthenticatedUser,
    /// Authenticated with the admin role
    AuthenticatedAdmin,
}

/// The application surface the router should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Login / signup flow
    Login,
    /// Ordinary user home feed
    Home,
    /// Administrative surface (news and user management)
    AdminHome,
}

/// Errors from session transitions
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("credential store error: {0}")]
    Store(#[from] CredentialStoreError),

    /// A login completion arrived while not authenticating
    #[error("invalid transition from {0:?}")]
    InvalidTransition(SessionState),
}

/// Client session: state machine plus persisted credentials
pub struct Session {
    state: SessionState,
    user: Option<UserProfile>,
    token: Option<String>,
    store: CredentialStore,
}

impl Session {
    /// Create an unauthenticated session over a credential store
    pub fn new(store: CredentialStore) -> Self {
        Self {
            state: SessionState::Unauthenticated,
            user: None,
            token: None,
            store,
        }
    }

    /// Restore a session from persisted credentials
    ///
    /// With both a token and a user on disk the session re-enters the
    /// authenticated state for the stored role; the first rejected request
    /// will drop it back to `Unauthenticated` if the token has expired in
    /// the meantime. Anything less than a complete pair restores to
    /// `Unauthenticated`.
    pub fn restore(store: CredentialStore) -> Result<Self, SessionError> {
        let mut session = Self::new(store);
        if let (Some(token), Some(user)) = (session.store.token(), session.store.user()) {
            session.state = Self::state_for_role(user.role);
            session.token = Some(token);
            session.user = Some(user);
        }
        Ok(session)
    }

    /// Begin an authentication attempt
    pub fn begin_login(&mut self) {
        self.state = SessionState::Authenticating;
    }

    /// Record a successful authentication
    ///
    /// Persists the token and user, then enters the authenticated state for
    /// the principal's role. Only valid while `Authenticating`.
    pub fn complete_login(
        &mut self,
        user: UserProfile,
        token: String,
    ) -> Result<(), SessionError> {
        if self.state != SessionState::Authenticating {
            return Err(SessionError::InvalidTransition(self.state));
        }

        self.store.store_session(&token, &user)?;
        self.state = Self::state_for_role(user.role);
        self.user = Some(user);
        self.token = Some(token);
        Ok(())
    }

    /// Record a failed authentication attempt
    pub fn fail_login(&mut self) {
        if self.state == SessionState::Authenticating {
            self.state = SessionState::Unauthenticated;
        }
    }

    /// Explicit logout: clear persisted credentials
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.end_session()
    }

    /// React to the server rejecting our token (expiry or invalidation)
    pub fn handle_expiry(&mut self) -> Result<(), SessionError> {
        tracing::info!("Session token rejected, returning to unauthenticated state");
        self.end_session()
    }

    /// The surface the router should show for the current state
    pub fn surface(&self) -> Surface {
        match self.state {
            SessionState::Unauthenticated | SessionState::Authenticating => Surface::Login,
            SessionState::AuthenticatedUser => Surface::Home,
            SessionState::AuthenticatedAdmin => Surface::AdminHome,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// The bearer value to attach to authenticated requests
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn state_for_role(role: Role) -> SessionState {
        match role {
            Role::Admin => SessionState::AuthenticatedAdmin,
            Role::User => SessionState::AuthenticatedUser,
        }
    }

    fn end_session(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.state = SessionState::Unauthenticated;
        self.user = None;
        self.token = None;
        Ok(())
    }
}
