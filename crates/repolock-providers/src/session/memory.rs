//! In-memory session token cache
//!
//! Per-session token sets in a concurrent hash map. Operations on one
//! session only touch that session's shard.

use async_trait::async_trait;
use dashmap::DashMap;
use repolock_domain::error::Result;
use repolock_domain::ports::SessionTokenCache;
use repolock_domain::value_objects::{LockToken, SessionId};
use std::collections::HashSet;
use std::sync::Arc;

/// In-memory `session -> tokens` cache
#[derive(Clone, Default)]
pub struct InMemorySessionTokenCache {
    sessions: Arc<DashMap<SessionId, HashSet<LockToken>>>,
}

impl InMemorySessionTokenCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions holding at least one token
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[async_trait]
impl SessionTokenCache for InMemorySessionTokenCache {
    async fn add(&self, session: &SessionId, token: LockToken) -> Result<()> {
        self.sessions.entry(session.clone()).or_default().insert(token);
        Ok(())
    }

    async fn remove(&self, session: &SessionId, token: &LockToken) -> Result<bool> {
        let removed = match self.sessions.get_mut(session) {
            Some(mut tokens) => tokens.remove(token),
            None => return Ok(false),
        };
        self.sessions.remove_if(session, |_, tokens| tokens.is_empty());
        Ok(removed)
    }

    async fn contains(&self, session: &SessionId, token: &LockToken) -> Result<bool> {
        Ok(self
            .sessions
            .get(session)
            .is_some_and(|tokens| tokens.contains(token)))
    }

    async fn remove_all(&self, session: &SessionId) -> Result<Vec<LockToken>> {
        Ok(self
            .sessions
            .remove(session)
            .map(|(_, tokens)| tokens.into_iter().collect())
            .unwrap_or_default())
    }

    async fn purge_token(&self, token: &LockToken) -> Result<usize> {
        let mut purged = 0;
        self.sessions.retain(|_, tokens| {
            if tokens.remove(token) {
                purged += 1;
            }
            !tokens.is_empty()
        });
        Ok(purged)
    }

    async fn tokens(&self, session: &SessionId) -> Result<Vec<LockToken>> {
        Ok(self
            .sessions
            .get(session)
            .map(|tokens| tokens.iter().cloned().collect())
            .unwrap_or_default())
    }
}

impl std::fmt::Debug for InMemorySessionTokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySessionTokenCache")
            .field("sessions", &self.sessions.len())
            .finish()
    }
}
