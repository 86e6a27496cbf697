//! Static access-control list oracle
//!
//! Decisions come from a fixed table built at startup: administrators may
//! override every lock, per-resource grants add overrides for single
//! resources, and restricted resources limit who may lock or read them.
//!
//! ## Example
//!
//! ```ignore
//! use repolock_providers::permission::StaticPermissionOracle;
//!
//! let oracle = StaticPermissionOracle::new()
//!     .with_admin("admin")
//!     .with_override("reports/q3", "team-lead")
//!     .with_restricted("hr/salaries", ["hr-manager"]);
//! ```

use async_trait::async_trait;
use repolock_domain::error::Result;
use repolock_domain::ports::PermissionOracle;
use repolock_domain::value_objects::{Principal, ResourceId};
use std::collections::{HashMap, HashSet};

/// Permission oracle backed by an immutable table
#[derive(Debug, Clone, Default)]
pub struct StaticPermissionOracle {
    admins: HashSet<Principal>,
    overrides: HashMap<ResourceId, HashSet<Principal>>,
    restricted: HashMap<ResourceId, HashSet<Principal>>,
}

impl StaticPermissionOracle {
    /// Create an oracle that grants nothing beyond the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oracle with the given administrators
    pub fn with_admins<I, P>(admins: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Principal>,
    {
        Self {
            admins: admins.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Grant `principal` override on every resource
    pub fn with_admin(mut self, principal: impl Into<Principal>) -> Self {
        self.admins.insert(principal.into());
        self
    }

    /// Grant `principal` override on `resource`
    pub fn with_override(
        mut self,
        resource: impl Into<ResourceId>,
        principal: impl Into<Principal>,
    ) -> Self {
        self.overrides
            .entry(resource.into())
            .or_default()
            .insert(principal.into());
        self
    }

    /// Allow only `principals` (and administrators) to lock or read `resource`
    pub fn with_restricted<I, P>(mut self, resource: impl Into<ResourceId>, principals: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Principal>,
    {
        self.restricted
            .entry(resource.into())
            .or_default()
            .extend(principals.into_iter().map(Into::into));
        self
    }

    /// Whether `principal` is an administrator
    pub fn is_admin(&self, principal: &Principal) -> bool {
        self.admins.contains(principal)
    }

    fn has_access(&self, principal: &Principal, resource: &ResourceId) -> bool {
        self.is_admin(principal)
            || self
                .restricted
                .get(resource)
                .is_none_or(|allowed| allowed.contains(principal))
    }
}

#[async_trait]
impl PermissionOracle for StaticPermissionOracle {
    async fn can_override_lock(&self, principal: &Principal, resource: &ResourceId) -> Result<bool> {
        Ok(self.is_admin(principal)
            || self
                .overrides
                .get(resource)
                .is_some_and(|granted| granted.contains(principal)))
    }

    async fn can_lock(&self, principal: &Principal, resource: &ResourceId) -> Result<bool> {
        Ok(self.has_access(principal, resource))
    }

    async fn can_read(&self, principal: &Principal, resource: &ResourceId) -> Result<bool> {
        Ok(self.has_access(principal, resource))
    }
}
