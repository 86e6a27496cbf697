//! Tokio Broadcast Lock Event Bus
//!
//! Event bus implementation using tokio broadcast channels for in-process
//! distribution of lock events to audit subscribers.
//!
//! ## Example
//!
//! ```ignore
//! use repolock_providers::events::TokioLockEventBus;
//!
//! let bus = TokioLockEventBus::new();
//! let mut events = bus.subscribe();
//! // hand `Arc::new(bus)` to the lock service, then consume `events`
//! ```

use crate::constants::EVENT_CHANNEL_DEFAULT_CAPACITY;
use async_trait::async_trait;
use futures::Stream;
use futures::stream;
use repolock_domain::error::Result;
use repolock_domain::events::LockEvent;
use repolock_domain::ports::LockEventPublisher;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Boxed async stream of lock events
pub type LockEventStream = Pin<Box<dyn Stream<Item = LockEvent> + Send + 'static>>;

/// Lock event bus using tokio broadcast channels
///
/// When the channel is full the oldest events are dropped for slow
/// subscribers, which see a lag warning and continue with newer events.
#[derive(Clone)]
pub struct TokioLockEventBus {
    sender: Arc<broadcast::Sender<LockEvent>>,
    capacity: usize,
}

impl TokioLockEventBus {
    /// Create a new bus with default capacity (1024)
    pub fn new() -> Self {
        Self::with_capacity(EVENT_CHANNEL_DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> LockEventStream {
        let receiver = self.sender.subscribe();

        // Convert broadcast receiver to a Stream that skips over lag
        let stream = stream::unfold(receiver, |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => return Some((event, rx)),
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("Lock event stream lagged by {} events", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Box::pin(stream)
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for TokioLockEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokioLockEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioLockEventBus")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

#[async_trait]
impl LockEventPublisher for TokioLockEventBus {
    async fn publish(&self, event: LockEvent) -> Result<()> {
        match self.sender.send(event) {
            Ok(count) => debug!("Published lock event to {} subscribers", count),
            Err(_) => debug!("Published lock event but no subscribers"),
        }
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        self.sender.receiver_count() > 0
    }
}
