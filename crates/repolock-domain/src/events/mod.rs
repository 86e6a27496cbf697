//! Domain events

mod lock_events;

pub use lock_events::{LockEvent, ReleaseAuthority};
