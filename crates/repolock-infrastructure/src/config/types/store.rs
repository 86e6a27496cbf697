//! Token store configuration types

use crate::constants::DEFAULT_LOCK_DIR;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Token store backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreProvider {
    /// Process-lifetime store
    #[default]
    Memory,
    /// One JSON record per lock under `path`
    Filesystem,
}

impl StoreProvider {
    /// Configuration name of the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Filesystem => "filesystem",
        }
    }
}

/// Token store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend to use
    pub provider: StoreProvider,

    /// Directory for the filesystem backend
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Directory of the filesystem backend, falling back to the default
    pub fn lock_dir(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCK_DIR))
    }
}
