use std::sync::Arc;

use crate::application::cart::support;
use crate::domain::cart::model::Cart;
use crate::domain::cart::storage::CartStorage;
use crate::domain::cart::use_cases::get::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub logger: Arc<dyn Logger>,
}

impl GetCartUseCase for GetCartUseCaseImpl {
    fn execute(&self) -> Cart {
        self.logger.debug("Reading cart");
        support::read_or_empty(self.storage.as_ref(), self.logger.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLine;
    use crate::domain::catalog::model::{LocalizedName, Product, ProductCategory};
    use crate::domain::errors::StorageError;
    use mockall::mock;

    mock! {
        pub Storage {}

        impl CartStorage for Storage {
            fn load(&self) -> Result<Vec<CartLine>, StorageError>;
            fn store(&self, lines: &[CartLine]) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: u32) -> Product {
        Product {
            id,
            name: LocalizedName::new("수분 크림", "Hydra Cream"),
            sale_price: 90_000,
            original_price: 90_000,
            on_sale: false,
            category: ProductCategory::Skincare,
            review_count: 0,
            like_count: 0,
        }
    }

    #[test]
    fn should_return_stored_lines() {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| {
            Ok(vec![CartLine {
                product: product(1),
                quantity: 2,
            }])
        });

        let use_case = GetCartUseCaseImpl {
            storage: Arc::new(storage),
            logger: mock_logger(),
        };

        let cart = use_case.execute();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn should_return_empty_cart_when_read_fails() {
        let mut storage = MockStorage::new();
        storage
            .expect_load()
            .returning(|| Err(StorageError::ReadFailure));

        let use_case = GetCartUseCaseImpl {
            storage: Arc::new(storage),
            logger: mock_logger(),
        };

        let cart = use_case.execute();

        assert!(cart.is_empty());
    }
}
