use super::backend_config::BackendConfig;
use super::storage_config::StorageConfig;

pub struct AppConfig {
    pub storage: StorageConfig,
    pub backend: BackendConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            backend: BackendConfig::from_env(),
        }
    }
}
