//! Session directory implementations

pub mod memory;

pub use memory::InMemorySessionDirectory;
