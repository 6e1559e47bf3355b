use crate::domain::errors::StorageError;

use super::model::CartLine;

/// Port for the durable local store holding the cart document.
///
/// The adapter owns serialization: malformed or schema-invalid content
/// surfaces as `StorageError::ReadFailure`, which the application layer
/// treats as "no cart" rather than a fatal error.
pub trait CartStorage: Send + Sync {
    fn load(&self) -> Result<Vec<CartLine>, StorageError>;
    fn store(&self, lines: &[CartLine]) -> Result<(), StorageError>;
}
