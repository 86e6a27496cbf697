//! Null lock event publisher
//!
//! Accepts and drops every event. Used when nobody audits lock activity.

use async_trait::async_trait;
use repolock_domain::error::Result;
use repolock_domain::events::LockEvent;
use repolock_domain::ports::LockEventPublisher;

/// Publisher that discards events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLockEventPublisher;

impl NullLockEventPublisher {
    /// Create a new null publisher
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LockEventPublisher for NullLockEventPublisher {
    async fn publish(&self, _event: LockEvent) -> Result<()> {
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}
