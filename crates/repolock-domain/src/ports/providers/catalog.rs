//! Resource Catalog Port

use crate::error::Result;
use crate::value_objects::ResourceId;
use async_trait::async_trait;

/// Existence check against the storage engine
#[async_trait]
pub trait ResourceCatalog: Send + Sync {
    /// Whether `resource` exists
    async fn exists(&self, resource: &ResourceId) -> Result<bool>;
}
