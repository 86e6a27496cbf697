//! Per-resource serialization
//!
//! A keyed async mutex. Holding the gate for a resource excludes every other
//! state transition on that resource while leaving other resources free.

use dashmap::DashMap;
use repolock_domain::value_objects::ResourceId;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Keyed mutex over resource identifiers
///
/// Slots are created on first use and removed when the last holder or
/// waiter leaves, so the table only grows with in-flight resources.
#[derive(Debug, Default)]
pub struct ResourceGate {
    slots: DashMap<ResourceId, Arc<Mutex<()>>>,
}

impl ResourceGate {
    /// Create an empty gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `resource`
    ///
    /// Cancel safe: dropping the future while it waits releases its claim on
    /// the slot, and the slot is removed if nobody else is using it.
    pub async fn lock(&self, resource: &ResourceId) -> GateGuard<'_> {
        // The shard guard returned by `entry` must not live across the await.
        let slot = self.slots.entry(resource.clone()).or_default().clone();
        let mut guard = GateGuard {
            gate: self,
            resource: resource.clone(),
            held: None,
        };
        // Declared after `guard` so a cancelled wait drops it first.
        let acquire = slot.lock_owned();
        guard.held = Some(acquire.await);
        guard
    }

    /// Number of resources currently held or waited on
    pub fn active(&self) -> usize {
        self.slots.len()
    }
}

/// Exclusive access to one resource, released on drop
#[derive(Debug)]
pub struct GateGuard<'a> {
    gate: &'a ResourceGate,
    resource: ResourceId,
    held: Option<OwnedMutexGuard<()>>,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        drop(self.held.take());
        // Only the table itself still references an idle slot.
        self.gate
            .slots
            .remove_if(&self.resource, |_, slot| Arc::strong_count(slot) == 1);
    }
}
