/**
 * Session Tokens
 *
 * This module issues and verifies the stateless session tokens that prove an
 * authenticated identity. Tokens are HS256 JWTs over a server-local secret,
 * bind a user ID and role, and expire one hour after issuance. There is no
 * refresh and no revocation list; expiry forces a new login.
 *
 * The Google identity-assertion path lives in `auth::google` and shares no
 * secret with this issuer.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::shared::user::Role;

/// Session-token lifetime: one hour
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Access tier of the user at issuance time
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// The authenticated identity resolved from a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: Role,
}

/// Get the signing secret from the environment
///
/// Falls back to a development value so a bare checkout still runs; any real
/// deployment must set `JWT_SECRET`.
fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development secret");
        "motalk-dev-secret-change-in-production".to_string()
    })
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Create a session token for a user
///
/// The issuance time is embedded, so two tokens minted at different seconds
/// for the same principal are distinct values.
pub fn create_token(user_id: Uuid, role: Role) -> Result<String, jsonwebtoken::errors::Error> {
    create_token_at(user_id, role, unix_now())
}

/// Create a session token with an explicit issuance time
///
/// Split out so tests can mint tokens that are already expired.
pub fn create_token_at(
    user_id: Uuid,
    role: Role,
    issued_at: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp: issued_at + TOKEN_TTL_SECS,
        iat: issued_at,
    };

    let secret = get_jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Resolve the principal behind a bearer value
///
/// Maps verification failures onto the auth error taxonomy: an expired
/// signature becomes `TokenExpired`, everything else (bad signature,
/// malformed payload, non-UUID subject) becomes `TokenInvalid`.
pub fn principal_from_token(token: &str) -> Result<Principal, AuthError> {
    let claims = verify_token(token).map_err(|e| {
        if matches!(
            e.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ) {
            AuthError::TokenExpired
        } else {
            AuthError::TokenInvalid
        }
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::TokenInvalid)?;
    Ok(Principal {
        user_id,
        role: claims.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_token() {
        let token = create_token(Uuid::new_v4(), Role::User).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_token_recovers_claims() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, Role::Admin).unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_principal_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, Role::User).unwrap();

        let principal = principal_from_token(&token).unwrap();
        assert_eq!(principal, Principal { user_id, role: Role::User });
    }

    #[test]
    fn test_tokens_at_different_instants_are_distinct() {
        let user_id = Uuid::new_v4();
        let now = unix_now();
        let first = create_token_at(user_id, Role::User, now).unwrap();
        let second = create_token_at(user_id, Role::User, now + 1).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_expired_token() {
        let user_id = Uuid::new_v4();
        // Two hours in the past, well beyond the default validation leeway.
        let token = create_token_at(user_id, Role::User, unix_now() - 2 * TOKEN_TTL_SECS).unwrap();

        let result = principal_from_token(&token);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_malformed_token() {
        let result = principal_from_token("invalid.token.here");
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_tampered_token() {
        let token = create_token(Uuid::new_v4(), Role::User).unwrap();
        // Flip the final signature character.
        let mut tampered = token.clone();
        let last = if tampered.ends_with('A') { 'B' } else { 'A' };
        tampered.pop();
        tampered.push(last);

        let result = principal_from_token(&tampered);
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }
}
