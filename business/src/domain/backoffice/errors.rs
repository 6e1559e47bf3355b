/// Errors surfaced by the remote commerce backend.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("backend.unauthorized")]
    Unauthorized,
    #[error("backend.not_found")]
    NotFound,
    #[error("backend.network")]
    Network,
    #[error("backend.invalid_response")]
    InvalidResponse,
}
