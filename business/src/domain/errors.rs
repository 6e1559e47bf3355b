/// Storage errors for the locally persisted cart document.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage.read_failure")]
    ReadFailure,
    #[error("storage.write_failure")]
    WriteFailure,
}
