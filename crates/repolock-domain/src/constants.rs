//! Domain layer constants
//!
//! Contains constants that are part of the lock model and are enforced by
//! the application layer. Infrastructure-specific constants remain in
//! `repolock_infrastructure::constants`.

// ============================================================================
// TOKEN CONSTANTS
// ============================================================================

/// Default number of random bytes in a lock token
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Minimum number of random bytes accepted for a lock token
pub const MIN_TOKEN_BYTES: usize = 16;

// ============================================================================
// LOCK CONSTANTS
// ============================================================================

/// Maximum length of a lock message in characters
pub const MAX_LOCK_MESSAGE_CHARS: usize = 1024;

/// Maximum length of a resource identifier in bytes
pub const MAX_RESOURCE_ID_BYTES: usize = 512;
