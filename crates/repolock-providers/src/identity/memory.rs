//! In-memory session directory
//!
//! Stands in for the security subsystem: records which principal is logged
//! in on which session. Logging out here does not touch lock tokens; the
//! caller must also end the session on the lock service.

use async_trait::async_trait;
use dashmap::DashMap;
use repolock_domain::error::Result;
use repolock_domain::ports::SessionDirectory;
use repolock_domain::value_objects::{Principal, SessionId};
use std::sync::Arc;
use tracing::debug;

/// In-memory `session -> principal` directory
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionDirectory {
    sessions: Arc<DashMap<SessionId, Principal>>,
}

impl InMemorySessionDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new session for `principal`
    pub fn login(&self, principal: impl Into<Principal>) -> SessionId {
        let session = SessionId::new(uuid::Uuid::new_v4().to_string());
        self.login_as(session.clone(), principal);
        session
    }

    /// Register `session` as authenticated for `principal`
    pub fn login_as(&self, session: impl Into<SessionId>, principal: impl Into<Principal>) {
        let (session, principal) = (session.into(), principal.into());
        debug!(session = %session, principal = %principal, "Session opened");
        self.sessions.insert(session, principal);
    }

    /// Close `session`, returning the principal that was logged in
    pub fn logout(&self, session: &SessionId) -> Option<Principal> {
        self.sessions.remove(session).map(|(_, principal)| principal)
    }

    /// Number of open sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is open
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionDirectory for InMemorySessionDirectory {
    async fn principal(&self, session: &SessionId) -> Result<Option<Principal>> {
        Ok(self.sessions.get(session).map(|p| p.clone()))
    }
}
