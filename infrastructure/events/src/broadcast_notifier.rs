use tokio::sync::broadcast;

use business::domain::cart::notifier::CartNotifier;

/// Payload-less cart change signal. Observers re-read the cart themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartChanged;

/// Process-wide broadcast adapter for the `CartNotifier` port, the
/// window-event analog of the browser original. Any number of observers
/// may subscribe; publishing with no subscribers is fine.
pub struct BroadcastNotifier {
    tx: broadcast::Sender<CartChanged>,
}

impl BroadcastNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CartChanged> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CartNotifier for BroadcastNotifier {
    fn cart_changed(&self) {
        // A send error only means nobody is subscribed right now.
        let _ = self.tx.send(CartChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deliver_signal_to_subscriber() {
        let notifier = BroadcastNotifier::new();
        let mut rx = notifier.subscribe();

        notifier.cart_changed();

        assert!(matches!(rx.try_recv(), Ok(CartChanged)));
    }

    #[test]
    fn should_deliver_signal_to_every_subscriber() {
        let notifier = BroadcastNotifier::new();
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();

        notifier.cart_changed();

        assert!(matches!(first.try_recv(), Ok(CartChanged)));
        assert!(matches!(second.try_recv(), Ok(CartChanged)));
    }

    #[test]
    fn should_not_fail_without_subscribers() {
        let notifier = BroadcastNotifier::new();

        notifier.cart_changed();
    }

    #[test]
    fn should_fire_once_per_mutation() {
        let notifier = BroadcastNotifier::new();
        let mut rx = notifier.subscribe();

        notifier.cart_changed();
        notifier.cart_changed();

        assert!(matches!(rx.try_recv(), Ok(CartChanged)));
        assert!(matches!(rx.try_recv(), Ok(CartChanged)));
        assert!(rx.try_recv().is_err());
    }
}
