use std::env;
use std::path::PathBuf;

/// Location of the locally persisted cart document.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub cart_path: PathBuf,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_STORE_PATH: cart document path (default: ".storefront/cart.json")
    pub fn from_env() -> Self {
        let cart_path = env::var("CART_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".storefront/cart.json"));

        Self { cart_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_path() {
        let config = StorageConfig {
            cart_path: PathBuf::from(".storefront/cart.json"),
        };

        assert_eq!(config.cart_path.file_name().unwrap(), "cart.json");
    }
}
