use std::sync::Arc;

use crate::application::cart::support;
use crate::domain::cart::model::Cart;
use crate::domain::cart::notifier::CartNotifier;
use crate::domain::cart::storage::CartStorage;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub notifier: Arc<dyn CartNotifier>,
    pub logger: Arc<dyn Logger>,
}

impl AddToCartUseCase for AddToCartUseCaseImpl {
    fn execute(&self, params: AddToCartParams) -> Cart {
        // Zero-quantity adds are ignored entirely: nothing is persisted
        // and no notification fires.
        if params.quantity == 0 {
            self.logger.warn(&format!(
                "Ignoring zero-quantity add for product {}",
                params.product.id
            ));
            return support::read_or_empty(self.storage.as_ref(), self.logger.as_ref());
        }

        self.logger.info(&format!(
            "Adding product {} x{} to cart",
            params.product.id, params.quantity
        ));

        let mut cart = support::read_or_empty(self.storage.as_ref(), self.logger.as_ref());
        cart.add(params.product, params.quantity);
        support::persist_and_notify(
            &cart,
            self.storage.as_ref(),
            self.notifier.as_ref(),
            self.logger.as_ref(),
        );
        cart
    }
}
