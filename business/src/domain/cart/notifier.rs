/// Port for the payload-less "cart changed" broadcast.
///
/// Fired once after every successfully persisted cart mutation; observers
/// (badge counters, page re-renders) re-read the cart themselves.
pub trait CartNotifier: Send + Sync {
    fn cart_changed(&self);
}
