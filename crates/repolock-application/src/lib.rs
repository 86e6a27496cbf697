//! Application Layer - repolock
//!
//! This crate contains the application layer of the repository lock service,
//! implementing the lock manager use case on top of the domain ports.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains the use case implementation ([`LockService`])
//! - Defines the interfaces callers and administrators program against
//! - Serializes state transitions per resource ([`ResourceGate`])
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `repolock-domain`: For the lock model, errors and port traits
//! - Pure Rust libraries for async, logging and concurrency

pub mod domain_services;
pub mod resource_gate;
pub mod use_cases;

pub use domain_services::*;
pub use resource_gate::{GateGuard, ResourceGate};
pub use use_cases::*;
