use std::sync::Arc;

use crate::application::cart::support;
use crate::domain::cart::model::Cart;
use crate::domain::cart::notifier::CartNotifier;
use crate::domain::cart::storage::CartStorage;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub notifier: Arc<dyn CartNotifier>,
    pub logger: Arc<dyn Logger>,
}

impl ClearCartUseCase for ClearCartUseCaseImpl {
    fn execute(&self) -> Cart {
        self.logger.info("Clearing cart");

        let cart = Cart::empty();
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

    #[test]
    fn should_persist_empty_cart_and_notify() {
        let mut storage = MockStorage::new();
        storage
            .expect_store()
            .withf(|lines: &[CartLine]| lines.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let mut notifier = MockNotifier::new();
        notifier.expect_cart_changed().times(1).returning(|| ());

        let use_case = ClearCartUseCaseImpl {
            storage: Arc::new(storage),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let cart = use_case.execute();

        assert!(cart.is_empty());
    }

    #[test]
    fn should_swallow_write_failure_without_notifying() {
        let mut storage = MockStorage::new();
        storage
            .expect_store()
            .returning(|_| Err(StorageError::WriteFailure));

        let mut notifier = MockNotifier::new();
        notifier.expect_cart_changed().never();

        let use_case = ClearCartUseCaseImpl {
            storage: Arc::new(storage),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let cart = use_case.execute();

        assert!(cart.is_empty());
    }
}
