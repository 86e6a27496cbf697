//! Provider-specific constants

/// File extension of lock records written by the filesystem token store
pub const LOCK_FILE_EXTENSION: &str = "lock.json";

/// Prefix of in-flight temporary files in the filesystem token store
pub const LOCK_TEMP_PREFIX: &str = ".pending-";

/// Prefix of undecodable lock records moved aside by the filesystem token store
pub const LOCK_QUARANTINE_PREFIX: &str = ".corrupt-";

/// Default capacity of the tokio broadcast event channel
pub const EVENT_CHANNEL_DEFAULT_CAPACITY: usize = 1024;
