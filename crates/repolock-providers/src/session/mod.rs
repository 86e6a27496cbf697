//! Session token cache implementations

pub mod memory;

pub use memory::InMemorySessionTokenCache;
