/**
 * Client Configuration
 *
 * Where the API lives. Read once from the environment; the rest of the
 * client takes a `ClientConfig` explicitly instead of consulting ambient
 * state.
 */

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let server_url =
            std::env::var("MOTALK_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl ClientConfig {
    /// Create a configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at an explicit server URL
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}
