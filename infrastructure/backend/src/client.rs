use reqwest::{Client, StatusCode};

use business::domain::backoffice::errors::BackendError;

/// Shared HTTP client configuration for the remote commerce backend.
pub struct BackendClient {
    pub client: Client,
    pub base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Joins a path onto the configured base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Maps a non-success HTTP status onto the backend error taxonomy.
pub(crate) fn error_for_status(status: StatusCode) -> BackendError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Unauthorized,
        StatusCode::NOT_FOUND => BackendError::NotFound,
        _ => BackendError::Network,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_url_without_doubling_slashes() {
        let client = BackendClient::new("http://localhost:8080/api/");

        assert_eq!(
            client.url("/admin/session"),
            "http://localhost:8080/api/admin/session"
        );
    }

    #[test]
    fn should_map_status_codes_to_backend_errors() {
        assert_eq!(
            error_for_status(StatusCode::UNAUTHORIZED),
            BackendError::Unauthorized
        );
        assert_eq!(
            error_for_status(StatusCode::FORBIDDEN),
            BackendError::Unauthorized
        );
        assert_eq!(
            error_for_status(StatusCode::NOT_FOUND),
            BackendError::NotFound
        );
        assert_eq!(
            error_for_status(StatusCode::INTERNAL_SERVER_ERROR),
            BackendError::Network
        );
    }
}
