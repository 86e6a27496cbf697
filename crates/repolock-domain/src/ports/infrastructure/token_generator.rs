//! Token Generator Port

use crate::value_objects::LockToken;

/// Source of fresh, unguessable lock tokens
pub trait TokenGenerator: Send + Sync {
    /// Generate a new token
    fn generate(&self) -> LockToken;
}
