//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the lock model.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ResourceId`] | Opaque identifier of a file or folder |
//! | [`SessionId`] | Identifier of an authenticated connection |
//! | [`Principal`] | Authenticated identity |
//! | [`Caller`] | Session plus the principal it acts for |
//! | [`LockToken`] | Unguessable proof of the right to unlock |
//! | [`Lock`] | Active lock record, token included |
//! | [`LockInfo`] | Owner, message and timestamp of a lock |

/// Identifier value objects
pub mod ids;
/// Lock records
pub mod lock;
/// Lock token
pub mod token;

pub use ids::{Caller, Principal, ResourceId, SessionId};
pub use lock::{Lock, LockInfo, LockScope};
pub use token::LockToken;
