mod channel;
mod event_handler;

pub use channel::{Callback, EventEmitter, SubscriptionId};
pub use event_handler::EventHandler;
