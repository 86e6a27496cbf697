//! Error handling types

use crate::value_objects::LockInfo;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the repository lock service
#[derive(Error, Debug)]
pub enum Error {
    /// The resource already carries an active lock
    ///
    /// Carries the current holder so callers can show who locked the
    /// resource and why.
    #[error("Already locked: {info}")]
    AlreadyLocked {
        /// The lock that is currently in effect
        info: LockInfo,
    },

    /// The resource is not locked
    #[error("Not locked: {resource}")]
    NotLocked {
        /// The resource that was expected to be locked
        resource: String,
    },

    /// The caller holds no token and has no override permission
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Description of the denied operation
        message: String,
    },

    /// Backing store I/O failure
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Resource unknown to the storage engine
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Lock state error creation methods
impl Error {
    /// Create an already-locked error from the lock in effect
    pub fn already_locked(info: LockInfo) -> Self {
        Self::AlreadyLocked { info }
    }

    /// Create a not-locked error
    pub fn not_locked<S: Into<String>>(resource: S) -> Self {
        Self::NotLocked {
            resource: resource.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Storage error creation methods
impl Error {
    /// Create a storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage error with source
    pub fn storage_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// Whether the caller may retry the operation as-is
    ///
    /// Only backing store failures qualify. After a storage failure on
    /// release, callers must re-query the lock before retrying because the
    /// removal may already have committed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    /// The lock currently in effect, for `AlreadyLocked` errors
    pub fn current_lock(&self) -> Option<&LockInfo> {
        match self {
            Self::AlreadyLocked { info } => Some(info),
            _ => None,
        }
    }
}
