//! Filesystem token store provider
//!
//! Persists one JSON lock record per resource so locks survive a restart.
//!
//! ## Layout
//!
//! ```text
//! <base_path>/
//!   <sha256(resource id)>.lock.json
//!   .pending-<uuid>            (in-flight writes)
//!   .corrupt-<uuid>            (undecodable records moved aside)
//! ```
//!
//! Records are written and synced to a temporary file first, then published
//! with a hard link, which fails if the target exists. The directory is
//! synced after every link and removal. A record is therefore either absent
//! or complete, and two writers can never both create one.
//!
//! A record that cannot be decoded holds no usable token, so it is treated
//! as an orphan: reads report the resource unlocked, and the next write or
//! removal under the gate moves it aside for inspection.

use crate::constants::{LOCK_FILE_EXTENSION, LOCK_QUARANTINE_PREFIX, LOCK_TEMP_PREFIX};
use async_trait::async_trait;
use repolock_application::ResourceGate;
use repolock_domain::error::{Error, Result};
use repolock_domain::ports::TokenStore;
use repolock_domain::value_objects::{Lock, LockToken, ResourceId};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Attempts to publish a record when orphans keep getting in the way
const PUBLISH_ATTEMPTS: usize = 3;

/// Filesystem-backed token store provider
///
/// Conditional writes and removals are serialized in-process by a
/// per-resource gate. Sharing one directory between processes is not
/// supported.
#[derive(Debug)]
pub struct FilesystemTokenStore {
    base_path: PathBuf,
    gate: ResourceGate,
}

/// What a record file on disk turned out to hold
enum Record {
    Missing,
    Valid(Lock),
    Corrupt,
}

impl FilesystemTokenStore {
    /// Open (creating if needed) a store rooted at `base_path`
    pub async fn open(base_path: impl AsRef<Path>) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).await.map_err(|e| {
            Error::storage_with_source(
                format!("Failed to create lock directory {}", base_path.display()),
                e,
            )
        })?;
        Self::sweep_pending(&base_path).await;
        Ok(Self {
            base_path,
            gate: ResourceGate::new(),
        })
    }

    /// Directory holding the lock records
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn record_path(&self, resource: &ResourceId) -> PathBuf {
        let digest = Sha256::digest(resource.as_str().as_bytes());
        self.base_path
            .join(format!("{}.{LOCK_FILE_EXTENSION}", hex::encode(digest)))
    }

    fn side_path(&self, prefix: &str) -> PathBuf {
        self.base_path
            .join(format!("{prefix}{}", uuid::Uuid::new_v4()))
    }

    /// Remove temporary files left behind by interrupted writes
    async fn sweep_pending(base_path: &Path) {
        let Ok(mut entries) = fs::read_dir(base_path).await else {
            return;
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            let name = entry.file_name();
            if name.to_string_lossy().starts_with(LOCK_TEMP_PREFIX) {
                if let Err(e) = fs::remove_file(entry.path()).await {
                    warn!(path = %entry.path().display(), error = %e, "Failed to remove pending lock file");
                }
            }
        }
    }

    async fn read_record(path: &Path) -> Result<Record> {
        match fs::read(path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(lock) => Ok(Record::Valid(lock)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Undecodable lock record");
                    Ok(Record::Corrupt)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Record::Missing),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to read lock record {}", path.display()),
                e,
            )),
        }
    }

    /// Write `bytes` to `path` and flush them to stable storage
    async fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
        let write = async {
            let mut file = fs::File::create(path).await?;
            file.write_all(bytes).await?;
            file.sync_all().await?;
            Ok::<(), std::io::Error>(())
        };
        write.await.map_err(|e| {
            Error::storage_with_source(format!("Failed to write {}", path.display()), e)
        })
    }

    /// Make links, renames and removals in the store directory durable
    async fn sync_dir(&self) -> Result<()> {
        #[cfg(unix)]
        {
            let sync = async {
                fs::File::open(&self.base_path).await?.sync_all().await?;
                Ok::<(), std::io::Error>(())
            };
            sync.await.map_err(|e| {
                Error::storage_with_source(
                    format!("Failed to sync lock directory {}", self.base_path.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// Move an undecodable record out of the way, keeping it for inspection
    ///
    /// Must be called under the gate of the record's resource.
    async fn quarantine(&self, target: &Path) -> Result<()> {
        let aside = self.side_path(LOCK_QUARANTINE_PREFIX);
        match fs::rename(target, &aside).await {
            Ok(()) => {
                warn!(
                    record = %target.display(),
                    moved_to = %aside.display(),
                    "Quarantined undecodable lock record"
                );
                self.sync_dir().await
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to quarantine lock record {}", target.display()),
                e,
            )),
        }
    }

    /// Link `pending` into place unless a valid record already exists
    async fn publish(&self, pending: &Path, target: &Path) -> Result<Option<Lock>> {
        for _ in 0..PUBLISH_ATTEMPTS {
            match fs::hard_link(pending, target).await {
                Ok(()) => {
                    self.sync_dir().await?;
                    return Ok(None);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    match Self::read_record(target).await? {
                        Record::Valid(existing) => return Ok(Some(existing)),
                        Record::Corrupt => self.quarantine(target).await?,
                        Record::Missing => {}
                    }
                }
                Err(e) => {
                    return Err(Error::storage_with_source(
                        format!("Failed to publish lock record {}", target.display()),
                        e,
                    ));
                }
            }
        }
        Err(Error::storage(format!(
            "Lock record {} kept changing during conditional write",
            target.display()
        )))
    }

    async fn discard(path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            if e.kind() != ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "Failed to remove pending lock file");
            }
        }
    }
}

#[async_trait]
impl TokenStore for FilesystemTokenStore {
    async fn put_if_absent(&self, lock: Lock) -> Result<Option<Lock>> {
        let target = self.record_path(&lock.resource);
        let pending = self.side_path(LOCK_TEMP_PREFIX);
        let bytes = serde_json::to_vec_pretty(&lock)
            .map_err(|e| Error::storage_with_source("Failed to encode lock record", e))?;

        let _gate = self.gate.lock(&lock.resource).await;
        if let Err(e) = Self::write_synced(&pending, &bytes).await {
            Self::discard(&pending).await;
            return Err(e);
        }

        let published = self.publish(&pending, &target).await;
        Self::discard(&pending).await;
        if let Ok(None) = published {
            debug!(resource = %lock.resource, path = %target.display(), "Lock record written");
        }
        published
    }

    async fn remove_if_token_matches(
        &self,
        resource: &ResourceId,
        token: &LockToken,
    ) -> Result<bool> {
        let target = self.record_path(resource);
        let _gate = self.gate.lock(resource).await;

        match Self::read_record(&target).await? {
            Record::Valid(lock) if lock.token == *token => {}
            Record::Corrupt => {
                self.quarantine(&target).await?;
                return Ok(false);
            }
            _ => return Ok(false),
        }
        match fs::remove_file(&target).await {
            Ok(()) => {
                self.sync_dir().await?;
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::storage_with_source(
                format!("Failed to remove lock record {}", target.display()),
                e,
            )),
        }
    }

    async fn get(&self, resource: &ResourceId) -> Result<Option<Lock>> {
        match Self::read_record(&self.record_path(resource)).await? {
            Record::Valid(lock) => Ok(Some(lock)),
            Record::Missing | Record::Corrupt => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Lock>> {
        let mut entries = fs::read_dir(&self.base_path).await.map_err(|e| {
            Error::storage_with_source(
                format!("Failed to list {}", self.base_path.display()),
                e,
            )
        })?;

        let suffix = format!(".{LOCK_FILE_EXTENSION}");
        let mut locks = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::storage_with_source("Failed to list lock records", e))?
        {
            if !entry.file_name().to_string_lossy().ends_with(&suffix) {
                continue;
            }
            // Records removed while listing and orphans are skipped.
            if let Record::Valid(lock) = Self::read_record(&entry.path()).await? {
                locks.push(lock);
            }
        }
        Ok(locks)
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}
