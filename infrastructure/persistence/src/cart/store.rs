use std::fs;
use std::path::PathBuf;

use business::domain::cart::model::CartLine;
use business::domain::cart::storage::CartStorage;
use business::domain::errors::StorageError;

use super::record::CartLineRecord;

/// File-backed cart storage: one JSON document holds the whole cart,
/// the local-storage analog of the browser original. A missing file
/// reads as an empty cart.
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for FileCartStorage {
    fn load(&self) -> Result<Vec<CartLine>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|_| StorageError::ReadFailure)?;
        let records: Vec<CartLineRecord> =
            serde_json::from_str(&raw).map_err(|_| StorageError::ReadFailure)?;

        records
            .into_iter()
            .map(CartLineRecord::into_domain)
            .collect()
    }

    fn store(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|_| StorageError::WriteFailure)?;
        }

        let records: Vec<CartLineRecord> = lines.iter().map(CartLineRecord::from_domain).collect();
        let payload = serde_json::to_string(&records).map_err(|_| StorageError::WriteFailure)?;

        fs::write(&self.path, payload).map_err(|_| StorageError::WriteFailure)
    }
}
