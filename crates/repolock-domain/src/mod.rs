//! # Domain Layer
//!
//! Core lock model and collaborator contracts for the repository lock service.
//!
//! The domain layer is free of I/O. It defines what a lock is, which errors a
//! lock operation can report, and the ports through which the application
//! layer reaches durable storage, the security subsystem and the storage
//! engine.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Identifiers, tokens, locks and lock info |
//! | [`events`] | Lock lifecycle events for audit subscribers |
//! | [`ports`] | Token store, session token cache, permission oracle and friends |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Domain limits |

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use events::{LockEvent, ReleaseAuthority};
pub use value_objects::{
    Caller, Lock, LockInfo, LockScope, LockToken, Principal, ResourceId, SessionId,
};
