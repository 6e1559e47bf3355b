use crate::domain::cart::model::Cart;
use crate::domain::cart::notifier::CartNotifier;
use crate::domain::cart::storage::CartStorage;
use crate::domain::logger::Logger;

/// Loads the persisted cart, substituting an empty cart for any read
/// failure.
pub(crate) fn read_or_empty(storage: &dyn CartStorage, logger: &dyn Logger) -> Cart {
    match storage.load() {
        Ok(lines) => Cart::from_lines(lines),
        Err(err) => {
            logger.warn(&format!("Cart read failed, treating as empty: {}", err));
            Cart::empty()
        }
    }
}

/// Persists the cart, then fires the change broadcast. A write failure is
/// logged and swallowed; the notification only fires for persisted
/// mutations.
pub(crate) fn persist_and_notify(
    cart: &Cart,
    storage: &dyn CartStorage,
    notifier: &dyn CartNotifier,
    logger: &dyn Logger,
) {
    match storage.store(cart.lines()) {
        Ok(()) => notifier.cart_changed(),
        Err(err) => logger.error(&format!("Cart write failed, mutation not persisted: {}", err)),
    }
}
