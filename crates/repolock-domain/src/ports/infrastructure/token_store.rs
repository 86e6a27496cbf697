//! Token Store Port
//!
//! Durable keyed storage of lock records, one per resource.

use crate::error::Result;
use crate::value_objects::{Lock, LockToken, ResourceId};
use async_trait::async_trait;

/// Durable `resource -> lock` storage
///
/// Implementations must keep at most one lock per resource under concurrent
/// `put_if_absent` calls, using the backing store's conditional write or a
/// per-resource mutex when it has none.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Store `lock` unless its resource already has one
    ///
    /// Returns `None` when the lock was stored and `Some(existing)` when the
    /// resource was already locked. Never overwrites.
    async fn put_if_absent(&self, lock: Lock) -> Result<Option<Lock>>;

    /// Remove the lock on `resource` only if it carries `token`
    ///
    /// Returns `true` when a lock was removed. A stale caller whose lock was
    /// already replaced gets `false` and leaves the new lock untouched.
    async fn remove_if_token_matches(&self, resource: &ResourceId, token: &LockToken)
    -> Result<bool>;

    /// Get the lock on `resource`, if any
    async fn get(&self, resource: &ResourceId) -> Result<Option<Lock>>;

    /// All active locks
    async fn list(&self) -> Result<Vec<Lock>>;

    /// Name of the backing implementation
    fn provider_name(&self) -> &str;
}
