//! In-memory token store provider
//!
//! Keeps lock records in a concurrent hash map. Records are lost on restart,
//! which suits tests and single-process deployments where locks are
//! advisory and short-lived.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use repolock_domain::error::Result;
use repolock_domain::ports::TokenStore;
use repolock_domain::value_objects::{Lock, LockToken, ResourceId};
use std::sync::Arc;

/// In-memory token store provider
///
/// `put_if_absent` and `remove_if_token_matches` run under the map's shard
/// lock for the key, which makes both atomic per resource.
#[derive(Clone, Default)]
pub struct InMemoryTokenStore {
    locks: Arc<DashMap<ResourceId, Lock>>,
}

impl InMemoryTokenStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active locks
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    /// Whether no lock is active
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn put_if_absent(&self, lock: Lock) -> Result<Option<Lock>> {
        match self.locks.entry(lock.resource.clone()) {
            Entry::Occupied(existing) => Ok(Some(existing.get().clone())),
            Entry::Vacant(slot) => {
                slot.insert(lock);
                Ok(None)
            }
        }
    }

    async fn remove_if_token_matches(
        &self,
        resource: &ResourceId,
        token: &LockToken,
    ) -> Result<bool> {
        Ok(self
            .locks
            .remove_if(resource, |_, lock| lock.token == *token)
            .is_some())
    }

    async fn get(&self, resource: &ResourceId) -> Result<Option<Lock>> {
        Ok(self.locks.get(resource).map(|lock| lock.clone()))
    }

    async fn list(&self) -> Result<Vec<Lock>> {
        Ok(self.locks.iter().map(|entry| entry.value().clone()).collect())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

impl std::fmt::Debug for InMemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTokenStore")
            .field("locks", &self.locks.len())
            .finish()
    }
}
