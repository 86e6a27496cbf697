//! Permission Oracle Port
//!
//! Authorization decisions that are independent of token possession.

use crate::error::Result;
use crate::value_objects::{Principal, ResourceId};
use async_trait::async_trait;

/// External authorization decision service
///
/// Calls may be slow or remote. The lock service never holds a
/// per-resource mutex while awaiting an answer.
#[async_trait]
pub trait PermissionOracle: Send + Sync {
    /// Whether `principal` may unlock `resource` without holding its token
    async fn can_override_lock(&self, principal: &Principal, resource: &ResourceId) -> Result<bool>;

    /// Whether `principal` may place a lock on `resource`
    async fn can_lock(&self, _principal: &Principal, _resource: &ResourceId) -> Result<bool> {
        Ok(true)
    }

    /// Whether `principal` may see who locked `resource` and why
    async fn can_read(&self, _principal: &Principal, _resource: &ResourceId) -> Result<bool> {
        Ok(true)
    }
}
