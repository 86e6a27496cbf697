//! Use case implementations

/// Lock manager
pub mod lock_service;

pub use lock_service::{LockService, LockServicePorts};
