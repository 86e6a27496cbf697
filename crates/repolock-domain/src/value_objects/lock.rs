//! Lock records and the publicly visible lock summary

use super::ids::{Principal, ResourceId};
use super::token::LockToken;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token transfer scope of a lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockScope {
    /// The token may be attached to any session that is allowed to present it
    #[default]
    Open,
}

/// Active lock on a resource
///
/// Immutable once created. Changing the owner or message requires an
/// unlock followed by a new lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    /// Locked resource
    pub resource: ResourceId,
    /// Principal that acquired the lock
    pub owner: Principal,
    /// Free text explaining why the resource is locked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When the lock was acquired
    pub created_at: DateTime<Utc>,
    /// Unlock token, unique across the store
    pub token: LockToken,
    /// Token transfer scope
    #[serde(default)]
    pub scope: LockScope,
}

impl Lock {
    /// Create an open-scoped lock stamped with the current time
    pub fn new(
        resource: ResourceId,
        owner: Principal,
        message: Option<String>,
        token: LockToken,
    ) -> Self {
        Self {
            resource,
            owner,
            message,
            created_at: Utc::now(),
            token,
            scope: LockScope::Open,
        }
    }

    /// Summary of this lock without the token
    pub fn info(&self) -> LockInfo {
        LockInfo {
            resource: self.resource.clone(),
            owner: self.owner.clone(),
            message: self.message.clone(),
            created_at: self.created_at,
        }
    }
}

/// What anyone allowed to read a resource may learn about its lock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockInfo {
    /// Locked resource
    pub resource: ResourceId,
    /// Principal that acquired the lock
    pub owner: Principal,
    /// Free text explaining why the resource is locked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When the lock was acquired
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for LockInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (owner: {}, since: {}",
            self.resource,
            self.owner,
            self.created_at.to_rfc3339()
        )?;
        if let Some(message) = &self.message {
            write!(f, ", message: {message}")?;
        }
        f.write_str(")")
    }
}
