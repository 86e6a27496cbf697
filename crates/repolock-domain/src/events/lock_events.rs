//! Lock lifecycle events
//!
//! Published after every successful transition so audit subscribers can see
//! who acquired, released, attached or detached what, and on whose
//! authority.

use crate::value_objects::{LockInfo, Principal, ResourceId, SessionId};
use serde::{Deserialize, Serialize};

/// Who authorized a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReleaseAuthority {
    /// The releasing session held the lock token
    TokenHolder {
        /// Principal of the releasing session
        principal: Principal,
    },
    /// The permission oracle granted an override
    Override {
        /// Principal whose override permission was used
        principal: Principal,
    },
    /// The storage engine removed the resource
    System,
}

/// Lock lifecycle event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LockEvent {
    /// A lock was created
    Acquired {
        /// The new lock
        lock: LockInfo,
        /// Session that acquired it and now holds the token
        session: SessionId,
    },
    /// A lock was removed
    Released {
        /// The removed lock
        lock: LockInfo,
        /// Session that released it (None for system releases)
        session: Option<SessionId>,
        /// Effective authorizer of the release
        authority: ReleaseAuthority,
    },
    /// An existing lock token was attached to a session
    TokenAttached {
        /// Locked resource
        resource: ResourceId,
        /// Session that received the token
        session: SessionId,
        /// Principal of that session
        principal: Principal,
    },
    /// A lock token was detached from a session
    TokenDetached {
        /// Locked resource
        resource: ResourceId,
        /// Session that gave up the token
        session: SessionId,
    },
    /// A session ended and dropped all of its tokens
    SessionEnded {
        /// The ended session
        session: SessionId,
        /// Number of tokens that were detached
        tokens_detached: usize,
    },
}

impl LockEvent {
    /// Short event name for logs and metrics labels
    pub fn name(&self) -> &'static str {
        match self {
            Self::Acquired { .. } => "acquired",
            Self::Released { .. } => "released",
            Self::TokenAttached { .. } => "token_attached",
            Self::TokenDetached { .. } => "token_detached",
            Self::SessionEnded { .. } => "session_ended",
        }
    }
}
