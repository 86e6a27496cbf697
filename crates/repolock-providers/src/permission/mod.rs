//! Permission oracle implementations
//!
//! Production deployments plug in the security subsystem's access-control
//! decisions. These providers cover configuration-driven administration and
//! tests.

pub mod null;
pub mod static_acl;

pub use null::NullPermissionOracle;
pub use static_acl::StaticPermissionOracle;
