/**
 * Authentication API Client
 *
 * HTTP client functions for the auth endpoints. Server-side rejections are
 * surfaced with their status and the server's message text, which the UI
 * shows verbatim in its transient message area; nothing is retried
 * automatically.
 */

use reqwest::Client;
use thiserror::Error;

use crate::client::config::ClientConfig;
use crate::shared::api::{
    GoogleLoginRequest, GoogleLoginResponse, LoginRequest, LoginResponse, SignupRequest,
    SignupResponse,
};
use crate::shared::user::{Role, UserProfile};

/// Errors produced by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or undecodable body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the request
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided message text
        message: String,
    },
}

impl ApiError {
    /// Whether this is the server telling us our token is gone
    ///
    /// The session layer reacts by returning to the unauthenticated state.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::Api { status: 403, .. })
    }
}

/// HTTP client for the authentication endpoints
pub struct AuthClient {
    config: ClientConfig,
    http: Client,
}

impl AuthClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Register a new account
    pub async fn signup(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupResponse, ApiError> {
        let request = SignupRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::User,
        };

        let response = self
            .http
            .post(self.config.api_url("/signup"))
            .json(&request)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Log in with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.config.api_url("/login"))
            .json(&request)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Log in with a Google-issued ID token
    pub async fn login_with_google(&self, id_token: &str) -> Result<GoogleLoginResponse, ApiError> {
        let request = GoogleLoginRequest {
            token: id_token.to_string(),
        };

        let response = self
            .http
            .post(self.config.api_url("/google-login"))
            .json(&request)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Fetch the current principal's profile
    pub async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        let response = self
            .http
            .get(self.config.api_url("/me"))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Decode a success body, or turn an error status into `ApiError::Api`
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Error bodies carry either `message` or, for signup validation,
        // `error`. Fall back to the status line when neither parses.
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .or_else(|| body.get("error"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| status.to_string());

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AuthClient {
        AuthClient::new(ClientConfig::with_server_url(server.uri()))
    }

    #[tokio::test]
    async fn test_login_success() {
        let server = MockServer::start().await;
        let user_id = Uuid::new_v4();
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_partial_json(serde_json::json!({
                "email": "a@example.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Login successful",
                "user": {
                    "id": user_id,
                    "full_name": "A B",
                    "email": "a@example.com",
                    "role": "user"
                },
                "token": "header.payload.signature"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.login("a@example.com", "secret1").await.unwrap();
        assert_eq!(response.user.id, user_id);
        assert_eq!(response.user.role, Role::User);
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "Invalid email or password"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.login("a@example.com", "wrong").await.unwrap_err();
        match error {
            ApiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid email or password");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_signup_failure_reads_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/signup"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Email already registered"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client
            .signup("A B", "a@example.com", "secret1")
            .await
            .unwrap_err();
        match error {
            ApiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Email already registered");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_me_sends_bearer_and_detects_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("Authorization", "Bearer stale-token"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "message": "Token is not valid"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.me("stale-token").await.unwrap_err();
        assert!(error.is_auth_rejection());
    }
}
