// Allow collapsible_if for nested error-kind checks
#![allow(clippy::collapsible_if)]

//! # repolock - Provider Implementations
//!
//! This crate contains the user-selectable implementations of the ports
//! defined in `repolock-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Token Store | `TokenStore` | InMemory, Filesystem |
//! | Session Tokens | `SessionTokenCache` | InMemory |
//! | Permissions | `PermissionOracle` | Static ACL, Null |
//! | Sessions | `SessionDirectory` | InMemory |
//! | Resources | `ResourceCatalog` | InMemory, Open |
//! | Events | `LockEventPublisher` | Tokio, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! repolock-providers = { version = "0.1", default-features = false, features = ["store-memory"] }
//! ```

// Re-export repolock-domain types commonly used with providers
pub use repolock_domain::error::{Error, Result};
pub use repolock_domain::ports::{
    LockEventPublisher, PermissionOracle, ResourceCatalog, SessionDirectory, SessionTokenCache,
    TokenStore,
};

/// Provider-specific constants
pub mod constants;

/// Resource catalog implementations
pub mod catalog;

/// Lock event publisher implementations
pub mod events;

/// Session directory implementations
pub mod identity;

/// Permission oracle implementations
pub mod permission;

/// Session token cache implementations
pub mod session;

/// Token store implementations
pub mod token_store;

pub use catalog::{InMemoryResourceCatalog, OpenResourceCatalog};
#[cfg(feature = "events-tokio")]
pub use events::{LockEventStream, TokioLockEventBus};
pub use events::NullLockEventPublisher;
pub use identity::InMemorySessionDirectory;
pub use permission::{NullPermissionOracle, StaticPermissionOracle};
pub use session::InMemorySessionTokenCache;
#[cfg(feature = "store-filesystem")]
pub use token_store::FilesystemTokenStore;
#[cfg(feature = "store-memory")]
pub use token_store::InMemoryTokenStore;
