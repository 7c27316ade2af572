// Implemented by anything holding scheduled callbacks or subscriptions that
// must not fire once the host tears it down.
pub trait Destroyable {
    fn destroy(&mut self);
}
