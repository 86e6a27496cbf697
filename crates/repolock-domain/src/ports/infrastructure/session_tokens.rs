//! Session Token Cache Port
//!
//! Per-session set of attached lock tokens. A session can only unlock what
//! it holds.

use crate::error::Result;
use crate::value_objects::{LockToken, SessionId};
use async_trait::async_trait;

/// `session -> set of tokens` storage
///
/// Operations on one session never need to coordinate with other sessions,
/// except [`SessionTokenCache::purge_token`] which sweeps all of them.
#[async_trait]
pub trait SessionTokenCache: Send + Sync {
    /// Attach `token` to `session` (idempotent)
    async fn add(&self, session: &SessionId, token: LockToken) -> Result<()>;

    /// Detach `token` from `session`; returns whether it was attached
    async fn remove(&self, session: &SessionId, token: &LockToken) -> Result<bool>;

    /// Whether `session` holds `token`
    async fn contains(&self, session: &SessionId, token: &LockToken) -> Result<bool>;

    /// Detach every token from `session`, returning what was detached
    async fn remove_all(&self, session: &SessionId) -> Result<Vec<LockToken>>;

    /// Detach `token` from every session; returns how many sessions held it
    async fn purge_token(&self, token: &LockToken) -> Result<usize>;

    /// Tokens currently attached to `session`
    async fn tokens(&self, session: &SessionId) -> Result<Vec<LockToken>>;
}
