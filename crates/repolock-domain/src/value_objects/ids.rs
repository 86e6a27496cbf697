//! Identifier value objects
//!
//! Opaque, immutable string identifiers. Locking operates on [`ResourceId`]
//! only; resolving paths to identifiers is the storage engine's job.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the raw identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is empty or whitespace only
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Immutable identifier of a file or folder in the repository
    ResourceId
);

string_id!(
    /// Identifier of an authenticated connection to the repository
    SessionId
);

string_id!(
    /// Authenticated identity performing an operation
    Principal
);

/// The session and identity on whose behalf an operation runs
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Caller {
    /// Session the operation runs in
    pub session: SessionId,
    /// Identity the session claims to be authenticated as
    pub principal: Principal,
}

impl Caller {
    /// Create a caller
    pub fn new(session: impl Into<SessionId>, principal: impl Into<Principal>) -> Self {
        Self {
            session: session.into(),
            principal: principal.into(),
        }
    }
}
