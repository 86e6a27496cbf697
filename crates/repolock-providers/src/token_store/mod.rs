//! Token store provider implementations
//!
//! | Provider | Durability | Conditional write |
//! |----------|------------|-------------------|
//! | [`InMemoryTokenStore`] | process lifetime | `DashMap` entry API |
//! | [`FilesystemTokenStore`] | survives restarts | hard link + per-resource gate |

#[cfg(feature = "store-filesystem")]
pub mod filesystem;
#[cfg(feature = "store-memory")]
pub mod memory;

#[cfg(feature = "store-filesystem")]
pub use filesystem::FilesystemTokenStore;
#[cfg(feature = "store-memory")]
pub use memory::InMemoryTokenStore;
