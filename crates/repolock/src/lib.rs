//! # repolock
//!
//! Hierarchical resource locking for a versioned tree store.
//!
//! A principal locks a resource to announce exclusive intent to modify it.
//! Every lock carries an unguessable token; a session may unlock only when
//! the token is attached to it, or when the permission oracle grants the
//! session's principal override rights.
//!
//! ## Example
//!
//! ```ignore
//! use repolock::prelude::*;
//! use std::sync::Arc;
//!
//! let sessions = Arc::new(InMemorySessionDirectory::new());
//! let context = LockContextBuilder::new(AppConfig::default())
//!     .with_sessions(sessions.clone())
//!     .build()
//!     .await?;
//!
//! let alice = sessions.login("alice");
//! let caller = Caller::new(alice.clone(), "alice");
//! let resource = ResourceId::new("/trunk/readme.txt");
//!
//! context.service().acquire(&resource, &caller, Some("typo fixes".into())).await?;
//! context.service().release(&resource, &alice).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - lock model, errors, events and port traits
//! - `application` - the lock manager and per-resource serialization
//! - `providers` - token stores, session token cache, oracles, event bus
//! - `infrastructure` - configuration, logging, token generation, wiring

/// Domain layer - lock model and port traits
pub mod domain {
    pub use repolock_domain::*;
}

/// Application layer - lock manager use case
pub mod application {
    pub use repolock_application::*;
}

/// Provider implementations of the domain ports
pub mod providers {
    pub use repolock_providers::*;
}

/// Infrastructure layer - config, logging and service wiring
pub mod infrastructure {
    pub use repolock_infrastructure::*;
}

/// Types needed by most callers
pub mod prelude {
    pub use repolock_application::{LockAdminInterface, LockServiceInterface};
    pub use repolock_domain::error::{Error, Result};
    pub use repolock_domain::events::{LockEvent, ReleaseAuthority};
    pub use repolock_domain::value_objects::{
        Caller, Lock, LockInfo, Principal, ResourceId, SessionId,
    };
    pub use repolock_infrastructure::config::AppConfig;
    pub use repolock_infrastructure::di::{LockContext, LockContextBuilder};
    pub use repolock_providers::{
        InMemoryResourceCatalog, InMemorySessionDirectory, StaticPermissionOracle,
    };
}

pub use repolock_domain::error::{Error, Result};
