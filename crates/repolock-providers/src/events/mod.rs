//! Lock event publisher implementations

pub mod null;
#[cfg(feature = "events-tokio")]
pub mod tokio;

pub use null::NullLockEventPublisher;
#[cfg(feature = "events-tokio")]
pub use self::tokio::{LockEventStream, TokioLockEventBus};
