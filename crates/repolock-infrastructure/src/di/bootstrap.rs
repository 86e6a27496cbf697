//! Lock service bootstrap
//!
//! Selects providers from configuration and wires them into a
//! [`LockService`].
//!
//! ```text
//! AppConfig → token store (memory | filesystem)
//!           → permission oracle (static admin list, or injected)
//!           → session directory / resource catalog (injected or defaults)
//!           → event bus (tokio broadcast | null)
//!           → LockService
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let sessions = Arc::new(InMemorySessionDirectory::new());
//! let context = LockContextBuilder::new(config)
//!     .with_sessions(sessions.clone())
//!     .build()
//!     .await?;
//!
//! let alice = sessions.login("alice");
//! let lock = context.service().acquire(&"/trunk/a".into(), &Caller::new(alice, "alice"), None).await?;
//! ```

use crate::config::{AppConfig, StoreProvider};
use crate::crypto::SecureTokenGenerator;
use repolock_application::{
    LockAdminInterface, LockService, LockServiceInterface, LockServicePorts,
};
use repolock_domain::error::Result;
use repolock_domain::ports::{
    LockEventPublisher, PermissionOracle, ResourceCatalog, SessionDirectory, TokenStore,
};
use repolock_providers::{
    FilesystemTokenStore, InMemoryResourceCatalog, InMemorySessionDirectory,
    InMemorySessionTokenCache, InMemoryTokenStore, LockEventStream, NullLockEventPublisher,
    OpenResourceCatalog, StaticPermissionOracle, TokioLockEventBus,
};
use std::sync::Arc;
use tracing::info;

/// Wired lock service plus the handles callers need around it
pub struct LockContext {
    config: Arc<AppConfig>,
    service: Arc<LockService>,
    events: Option<Arc<TokioLockEventBus>>,
}

impl LockContext {
    /// Lock operations for sessions
    pub fn service(&self) -> Arc<dyn LockServiceInterface> {
        self.service.clone()
    }

    /// Administrative lock operations
    pub fn admin(&self) -> Arc<dyn LockAdminInterface> {
        self.service.clone()
    }

    /// Concrete lock service
    pub fn lock_service(&self) -> Arc<LockService> {
        self.service.clone()
    }

    /// Event bus, when events are enabled
    pub fn events(&self) -> Option<Arc<TokioLockEventBus>> {
        self.events.clone()
    }

    /// Subscribe to lock events, when events are enabled
    pub fn subscribe(&self) -> Option<LockEventStream> {
        self.events.as_ref().map(|bus| bus.subscribe())
    }

    /// Configuration the context was built from
    pub fn config(&self) -> Arc<AppConfig> {
        self.config.clone()
    }
}

impl std::fmt::Debug for LockContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockContext")
            .field("store", &self.service.store_name())
            .field("events", &self.events.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`LockContext`]
///
/// Session directory, resource catalog and permission oracle belong to the
/// host system; inject them here. Defaults are an empty in-memory session
/// directory, a catalog where every resource exists, and a static oracle
/// granting overrides to `locking.admin_principals`.
pub struct LockContextBuilder {
    config: AppConfig,
    sessions: Option<Arc<dyn SessionDirectory>>,
    catalog: Option<Arc<dyn ResourceCatalog>>,
    permissions: Option<Arc<dyn PermissionOracle>>,
}

impl LockContextBuilder {
    /// Start from a configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            sessions: None,
            catalog: None,
            permissions: None,
        }
    }

    /// Use the host's session directory
    pub fn with_sessions(mut self, sessions: Arc<dyn SessionDirectory>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Use the host's resource catalog
    pub fn with_catalog(mut self, catalog: Arc<dyn ResourceCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use the host's permission oracle instead of the static admin list
    pub fn with_permissions(mut self, permissions: Arc<dyn PermissionOracle>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Open the token store and wire the lock service
    pub async fn build(self) -> Result<LockContext> {
        let config = self.config;
        let token_store = create_token_store(&config).await?;

        let permissions: Arc<dyn PermissionOracle> = match self.permissions {
            Some(permissions) => permissions,
            None => Arc::new(StaticPermissionOracle::with_admins(
                config.locking.admin_principals.iter().map(String::as_str),
            )),
        };
        let sessions: Arc<dyn SessionDirectory> = match self.sessions {
            Some(sessions) => sessions,
            None => Arc::new(InMemorySessionDirectory::new()),
        };
        let catalog: Arc<dyn ResourceCatalog> = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(OpenResourceCatalog::new()),
        };

        let bus = config
            .locking
            .events_enabled
            .then(|| Arc::new(TokioLockEventBus::with_capacity(config.locking.event_capacity)));
        let events: Arc<dyn LockEventPublisher> = match &bus {
            Some(bus) => bus.clone(),
            None => Arc::new(NullLockEventPublisher::new()),
        };

        let service = LockService::new(LockServicePorts {
            token_store,
            session_tokens: Arc::new(InMemorySessionTokenCache::new()),
            permissions,
            sessions,
            catalog,
            tokens: Arc::new(SecureTokenGenerator::new(config.locking.token_bytes)),
            events,
        });

        info!(
            store = service.store_name(),
            events = bus.is_some(),
            admins = config.locking.admin_principals.len(),
            "Lock service initialized"
        );

        Ok(LockContext {
            config: Arc::new(config),
            service: Arc::new(service),
            events: bus,
        })
    }
}

/// Build a lock context with default collaborators
///
/// Resources are known through `resources` when given; otherwise every
/// resource is treated as existing.
pub async fn init_lock_service(
    config: AppConfig,
    sessions: Arc<dyn SessionDirectory>,
    resources: Option<Vec<String>>,
) -> Result<LockContext> {
    let mut builder = LockContextBuilder::new(config).with_sessions(sessions);
    if let Some(resources) = resources {
        builder = builder.with_catalog(Arc::new(InMemoryResourceCatalog::with_resources(
            resources,
        )));
    }
    builder.build().await
}

async fn create_token_store(config: &AppConfig) -> Result<Arc<dyn TokenStore>> {
    match config.store.provider {
        StoreProvider::Memory => Ok(Arc::new(InMemoryTokenStore::new())),
        StoreProvider::Filesystem => {
            let dir = config.store.lock_dir();
            info!(path = %dir.display(), "Opening filesystem token store");
            Ok(Arc::new(FilesystemTokenStore::open(dir).await?))
        }
    }
}
