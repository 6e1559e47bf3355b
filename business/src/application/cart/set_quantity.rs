use std::sync::Arc;

use crate::application::cart::support;
use crate::domain::cart::model::Cart;
use crate::domain::cart::notifier::CartNotifier;
use crate::domain::cart::storage::CartStorage;
use crate::domain::cart::use_cases::set_quantity::{SetQuantityParams, SetQuantityUseCase};
use crate::domain::logger::Logger;

pub struct SetQuantityUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub notifier: Arc<dyn CartNotifier>,
    pub logger: Arc<dyn Logger>,
}

impl SetQuantityUseCase for SetQuantityUseCaseImpl {
    fn execute(&self, params: SetQuantityParams) -> Cart {
        self.logger.info(&format!(
            "Setting quantity of product {} to {}",
            params.product_id, params.quantity
        ));

        let mut cart = support::read_or_empty(self.storage.as_ref(), self.logger.as_ref());
        cart.set_quantity(params.product_id, params.quantity);
        support::persist_and_notify(
            &cart,
            self.storage.as_ref(),
            self.notifier.as_ref(),
            self.logger.as_ref(),
        );
        cart
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
        pub Notifier {}

        impl CartNotifier for Notifier {
            fn cart_changed(&self);
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

    fn line(id: u32, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id,
                name: LocalizedName::new(format!("상품 {}", id), format!("Product {}", id)),
                sale_price: 10_000,
                original_price: 10_000,
                on_sale: false,
                category: ProductCategory::Mask,
                review_count: 0,
                like_count: 0,
            },
            quantity,
        }
    }

    #[test]
    fn should_overwrite_quantity_of_existing_line() {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| Ok(vec![line(1, 2)]));
        storage
            .expect_store()
            .withf(|lines| lines.len() == 1 && lines[0].quantity == 7)
            .times(1)
            .returning(|_| Ok(()));

        let mut notifier = MockNotifier::new();
        notifier.expect_cart_changed().times(1).returning(|| ());

        let use_case = SetQuantityUseCaseImpl {
            storage: Arc::new(storage),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let cart = use_case.execute(SetQuantityParams {
            product_id: 1,
            quantity: 7,
        });

        assert_eq!(cart.lines()[0].quantity, 7);
    }

    #[test]
    fn should_delete_line_when_quantity_is_zero() {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| Ok(vec![line(1, 2)]));
        storage
            .expect_store()
            .withf(|lines: &[CartLine]| lines.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let mut notifier = MockNotifier::new();
        notifier.expect_cart_changed().times(1).returning(|| ());

        let use_case = SetQuantityUseCaseImpl {
            storage: Arc::new(storage),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let cart = use_case.execute(SetQuantityParams {
            product_id: 1,
            quantity: 0,
        });

        assert!(cart.is_empty());
    }

    #[test]
    fn should_not_create_line_for_absent_id() {
        let mut storage = MockStorage::new();
        storage.expect_load().returning(|| Ok(vec![line(1, 2)]));
        storage
            .expect_store()
            .withf(|lines| lines.len() == 1 && lines[0].product.id == 1 && lines[0].quantity == 2)
            .times(1)
            .returning(|_| Ok(()));

        let mut notifier = MockNotifier::new();
        notifier.expect_cart_changed().times(1).returning(|| ());

        let use_case = SetQuantityUseCaseImpl {
            storage: Arc::new(storage),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let cart = use_case.execute(SetQuantityParams {
            product_id: 42,
            quantity: 3,
        });

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }
}
