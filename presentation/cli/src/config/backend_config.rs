use std::env;

/// Configuration for the remote commerce backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    /// Load backend configuration from environment variables
    ///
    /// Environment variables:
    /// - BACKEND_API_URL: base URL of the commerce backend
    ///   (default: "http://localhost:8080/api")
    pub fn from_env() -> Self {
        let base_url = env::var("BACKEND_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());

        Self { base_url }
    }
}
