//! Null permission oracle
//!
//! Grants no overrides. Locking and reading are allowed, so only token
//! holders can ever unlock.

use async_trait::async_trait;
use repolock_domain::error::Result;
use repolock_domain::ports::PermissionOracle;
use repolock_domain::value_objects::{Principal, ResourceId};

/// Permission oracle without administrators
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPermissionOracle;

impl NullPermissionOracle {
    /// Create a new null oracle
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PermissionOracle for NullPermissionOracle {
    async fn can_override_lock(&self, _principal: &Principal, _resource: &ResourceId) -> Result<bool> {
        Ok(false)
    }
}
