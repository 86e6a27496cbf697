//! Lock service interfaces
//!
//! Contract surface for any transport (REST, RPC) built on top of the lock
//! manager. Every operation that acts for a session resolves the session's
//! principal through the session directory first.

use async_trait::async_trait;
use repolock_domain::error::Result;
use repolock_domain::value_objects::{Caller, Lock, LockInfo, ResourceId, SessionId};

/// Lock operations available to every authenticated session
#[async_trait]
pub trait LockServiceInterface: Send + Sync {
    /// Lock `resource` for `caller` and attach the new token to its session
    ///
    /// Fails with `AlreadyLocked` carrying the current holder when the
    /// resource is locked. Never overwrites an existing lock.
    async fn acquire(
        &self,
        resource: &ResourceId,
        caller: &Caller,
        message: Option<String>,
    ) -> Result<Lock>;

    /// Unlock `resource`
    ///
    /// Allowed when `session` holds the token, or when its principal may
    /// override the lock. Detaches the token from every session.
    async fn release(&self, resource: &ResourceId, session: &SessionId) -> Result<()>;

    /// Attach the token of the lock on `resource` to `session`
    ///
    /// For sessions that need to unlock a resource they did not lock in this
    /// session (e.g. after reconnecting). No-op when the resource is unlocked.
    async fn attach_existing_token(&self, resource: &ResourceId, session: &SessionId)
    -> Result<()>;

    /// Detach the token of the lock on `resource` from `session`
    ///
    /// Idempotent and infallible; failures are logged.
    async fn detach_token(&self, resource: &ResourceId, session: &SessionId);

    /// Owner, message and timestamp of the lock on `resource`, if locked
    async fn query(&self, resource: &ResourceId, session: &SessionId) -> Result<Option<LockInfo>>;

    /// Session logout hook: detach every token `session` holds
    ///
    /// Returns the number of detached tokens. Locks themselves survive.
    async fn end_session(&self, session: &SessionId) -> Result<usize>;

    /// Resource deletion hook: remove any lock on `resource`
    ///
    /// Must be called by the storage engine before the resource is destroyed.
    /// Returns the removed lock, if there was one.
    async fn resource_deleted(&self, resource: &ResourceId) -> Result<Option<LockInfo>>;
}

/// Administrative lock operations
#[async_trait]
pub trait LockAdminInterface: Send + Sync {
    /// Unlock `resource` through the override path, ignoring token possession
    async fn force_unlock(&self, resource: &ResourceId, admin_session: &SessionId)
    -> Result<LockInfo>;

    /// Active locks the admin session's principal may override
    async fn list_locks(&self, admin_session: &SessionId) -> Result<Vec<LockInfo>>;
}
