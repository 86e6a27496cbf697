//! Resource catalog implementations

pub mod memory;
pub mod open;

pub use memory::InMemoryResourceCatalog;
pub use open::OpenResourceCatalog;
