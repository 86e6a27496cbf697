//! In-memory resource catalog
//!
//! Set of known resource identifiers, registered and removed by whoever
//! plays the storage engine.

use async_trait::async_trait;
use dashmap::DashSet;
use repolock_domain::error::Result;
use repolock_domain::ports::ResourceCatalog;
use repolock_domain::value_objects::ResourceId;
use std::sync::Arc;

/// In-memory set of existing resources
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceCatalog {
    resources: Arc<DashSet<ResourceId>>,
}

impl InMemoryResourceCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog that knows `resources`
    pub fn with_resources<I, R>(resources: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ResourceId>,
    {
        let catalog = Self::new();
        for resource in resources {
            catalog.register(resource);
        }
        catalog
    }

    /// Record that `resource` exists
    pub fn register(&self, resource: impl Into<ResourceId>) {
        self.resources.insert(resource.into());
    }

    /// Forget `resource`; returns whether it was known
    pub fn unregister(&self, resource: &ResourceId) -> bool {
        self.resources.remove(resource).is_some()
    }
}

#[async_trait]
impl ResourceCatalog for InMemoryResourceCatalog {
    async fn exists(&self, resource: &ResourceId) -> Result<bool> {
        Ok(self.resources.contains(resource))
    }
}
