//! External collaborator ports

/// Resource existence port (storage engine)
pub mod catalog;
/// Authorization port
pub mod permission;
/// Session identity port (security subsystem)
pub mod session_directory;

pub use catalog::ResourceCatalog;
pub use permission::PermissionOracle;
pub use session_directory::SessionDirectory;
