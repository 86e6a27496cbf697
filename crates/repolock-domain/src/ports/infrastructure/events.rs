//! Lock Event Publisher Port
//!
//! Defines the contract for announcing lock transitions without coupling the
//! lock service to a specific transport (tokio broadcast, message broker).

use crate::error::Result;
use crate::events::LockEvent;
use async_trait::async_trait;

/// Publisher of lock lifecycle events
///
/// Publishing is best-effort: the lock service logs publish failures and
/// never fails a committed transition because of them.
#[async_trait]
pub trait LockEventPublisher: Send + Sync {
    /// Publish an event to all subscribers
    async fn publish(&self, event: LockEvent) -> Result<()>;

    /// Check if there are any active subscribers
    fn has_subscribers(&self) -> bool;
}
