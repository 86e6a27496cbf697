//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Lock model limits are defined in `repolock_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "repolock.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "repolock";

/// Environment variable prefix for configuration (`REPOLOCK__LOCKING__TOKEN_BYTES`)
pub const CONFIG_ENV_PREFIX: &str = "REPOLOCK";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "REPOLOCK_LOG";

/// File name stem for rotated log files
pub const LOG_FILE_STEM: &str = "repolock";

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Default directory of the filesystem token store
pub const DEFAULT_LOCK_DIR: &str = "./data/locks";
