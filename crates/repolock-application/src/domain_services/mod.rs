//! Use case interfaces

/// Lock service interfaces
pub mod lock;

pub use lock::{LockAdminInterface, LockServiceInterface};
