//! Lock token value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque, unguessable proof of the right to release one lock
///
/// `Debug` output is redacted so tokens cannot leak through logs, and
/// equality runs in time independent of where the first mismatch occurs.
#[derive(Clone, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockToken(String);

impl LockToken {
    /// Wrap an already generated token
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Reveal the raw token, for persistence and transport only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First six characters of the token, for correlating log lines
    ///
    /// This is a plain prefix, not a hash. It reveals part of the token, so
    /// it only appears in `Debug` output and debug-level logs.
    pub fn fingerprint(&self) -> String {
        self.0.chars().take(6).collect()
    }
}

impl PartialEq for LockToken {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.0.as_bytes(), other.0.as_bytes());
        if a.len() != b.len() {
            return false;
        }
        a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
    }
}

impl Hash for LockToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for LockToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LockToken({}..)", self.fingerprint())
    }
}
