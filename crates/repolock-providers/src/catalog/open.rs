//! Open resource catalog
//!
//! Reports every resource as existing. Used when the storage engine checks
//! existence itself before calling into the lock service.

use async_trait::async_trait;
use repolock_domain::error::Result;
use repolock_domain::ports::ResourceCatalog;
use repolock_domain::value_objects::ResourceId;

/// Catalog that knows every resource
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenResourceCatalog;

impl OpenResourceCatalog {
    /// Create a new open catalog
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResourceCatalog for OpenResourceCatalog {
    async fn exists(&self, _resource: &ResourceId) -> Result<bool> {
        Ok(true)
    }
}
