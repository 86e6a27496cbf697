//! Lock service configuration types

use repolock_domain::constants::DEFAULT_TOKEN_BYTES;
use serde::{Deserialize, Serialize};

/// Lock service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LockingConfig {
    /// Random bytes per lock token
    pub token_bytes: usize,

    /// Principals allowed to override any lock
    pub admin_principals: Vec<String>,

    /// Publish lock events on the in-process bus
    pub events_enabled: bool,

    /// Capacity of the lock event channel
    pub event_capacity: usize,
}

impl Default for LockingConfig {
    fn default() -> Self {
        Self {
            token_bytes: DEFAULT_TOKEN_BYTES,
            admin_principals: Vec::new(),
            events_enabled: true,
            event_capacity: 1024,
        }
    }
}
