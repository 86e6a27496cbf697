//! Secure lock token generation

use base64::{Engine as _, engine::general_purpose};
use rand::RngCore;
use repolock_domain::constants::{DEFAULT_TOKEN_BYTES, MIN_TOKEN_BYTES};
use repolock_domain::ports::TokenGenerator;
use repolock_domain::value_objects::LockToken;

/// Generates URL-safe tokens from the thread-local CSPRNG
#[derive(Debug, Clone, Copy)]
pub struct SecureTokenGenerator {
    bytes: usize,
}

impl SecureTokenGenerator {
    /// Create a generator producing `bytes` random bytes per token
    ///
    /// Values below the minimum are raised to it.
    pub fn new(bytes: usize) -> Self {
        Self {
            bytes: bytes.max(MIN_TOKEN_BYTES),
        }
    }

    /// Random bytes per token
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

impl Default for SecureTokenGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_BYTES)
    }
}

impl TokenGenerator for SecureTokenGenerator {
    fn generate(&self) -> LockToken {
        let mut bytes = vec![0u8; self.bytes];
        rand::rng().fill_bytes(&mut bytes);
        LockToken::new(general_purpose::URL_SAFE_NO_PAD.encode(bytes))
    }
}
