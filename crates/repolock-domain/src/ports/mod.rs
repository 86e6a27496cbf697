//! Domain Port Interfaces
//!
//! Defines all boundary contracts between the lock model and external layers.
//!
//! ## Architecture
//!
//! Ports define the contracts that external layers must implement.
//! This follows the Dependency Inversion Principle:
//! - High-level modules (domain, application) define interfaces
//! - Low-level modules (providers, infrastructure) implement them
//!
//! ## Organization
//!
//! - **infrastructure/** - Storage the lock service owns (token store, session token cache),
//!   token generation and event publishing
//! - **providers/** - External collaborators the lock service consults (permission oracle,
//!   session directory, resource catalog)

/// Infrastructure service ports
pub mod infrastructure;
/// External collaborator ports
pub mod providers;

pub use infrastructure::{LockEventPublisher, SessionTokenCache, TokenGenerator, TokenStore};
pub use providers::{PermissionOracle, ResourceCatalog, SessionDirectory};
