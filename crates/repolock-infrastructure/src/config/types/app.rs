//! Main application configuration

use super::{LockingConfig, LoggingConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Lock service configuration
    #[serde(default)]
    pub locking: LockingConfig,
    /// Token store configuration
    #[serde(default)]
    pub store: StoreConfig,
}
