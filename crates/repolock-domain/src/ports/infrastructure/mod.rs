//! Infrastructure service ports

/// Lock event publishing port
pub mod events;
/// Session token cache port
pub mod session_tokens;
/// Token generation port
pub mod token_generator;
/// Durable lock record port
pub mod token_store;

pub use events::LockEventPublisher;
pub use session_tokens::SessionTokenCache;
pub use token_generator::TokenGenerator;
pub use token_store::TokenStore;
