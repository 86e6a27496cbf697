//! Composition root
//!
//! Builds a ready-to-use lock service from [`AppConfig`](crate::config::AppConfig).

pub mod bootstrap;

pub use bootstrap::{LockContext, LockContextBuilder, init_lock_service};
