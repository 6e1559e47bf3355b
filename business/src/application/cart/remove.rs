use std::sync::Arc;

use crate::application::cart::support;
use crate::domain::cart::model::Cart;
use crate::domain::cart::notifier::CartNotifier;
use crate::domain::cart::storage::CartStorage;
use crate::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub storage: Arc<dyn CartStorage>,
    pub notifier: Arc<dyn CartNotifier>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    fn execute(&self, params: RemoveFromCartParams) -> Cart {
        self.logger
            .info(&format!("Removing product {} from cart", params.product_id));

        let mut cart = support::read_or_empty(self.storage.as_ref(), self.logger.as_ref());
        cart.remove(params.product_id);
        support::persist_and_notify(
            &cart,
            self.storage.as_ref(),
            self.notifier.as_ref(),
            self.logger.as_ref(),
        );
        cart
    }
}
