//! Lock Service Use Case
//!
//! Application service implementing open-scoped resource locking.
//! Orchestrates the token store, the session token cache and the permission
//! oracle, and enforces the `UNLOCKED -> LOCKED -> UNLOCKED` state machine.
//!
//! ## Serialization
//!
//! Store writes and session attach/detach for one resource run under the
//! [`ResourceGate`] for that resource. Collaborators that may be slow or
//! remote (session directory, permission oracle, resource catalog) are
//! consulted before the gate is taken, never while holding it.

use crate::domain_services::lock::{LockAdminInterface, LockServiceInterface};
use crate::resource_gate::ResourceGate;
use async_trait::async_trait;
use repolock_domain::constants::{MAX_LOCK_MESSAGE_CHARS, MAX_RESOURCE_ID_BYTES};
use repolock_domain::error::{Error, Result};
use repolock_domain::events::{LockEvent, ReleaseAuthority};
use repolock_domain::ports::{
    LockEventPublisher, PermissionOracle, ResourceCatalog, SessionDirectory, SessionTokenCache,
    TokenGenerator, TokenStore,
};
use repolock_domain::value_objects::{
    Caller, Lock, LockInfo, LockToken, Principal, ResourceId, SessionId,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Collaborators the lock service is built from
#[derive(Clone)]
pub struct LockServicePorts {
    /// Durable lock records
    pub token_store: Arc<dyn TokenStore>,
    /// Tokens attached to each session
    pub session_tokens: Arc<dyn SessionTokenCache>,
    /// Authorization decisions
    pub permissions: Arc<dyn PermissionOracle>,
    /// Principal behind each session
    pub sessions: Arc<dyn SessionDirectory>,
    /// Resource existence
    pub catalog: Arc<dyn ResourceCatalog>,
    /// Fresh lock tokens
    pub tokens: Arc<dyn TokenGenerator>,
    /// Lock event subscribers
    pub events: Arc<dyn LockEventPublisher>,
}

/// Lock manager implementation
pub struct LockService {
    token_store: Arc<dyn TokenStore>,
    session_tokens: Arc<dyn SessionTokenCache>,
    permissions: Arc<dyn PermissionOracle>,
    sessions: Arc<dyn SessionDirectory>,
    catalog: Arc<dyn ResourceCatalog>,
    tokens: Arc<dyn TokenGenerator>,
    events: Arc<dyn LockEventPublisher>,
    gate: ResourceGate,
}

impl LockService {
    /// Create a new lock service with injected dependencies
    pub fn new(ports: LockServicePorts) -> Self {
        Self {
            token_store: ports.token_store,
            session_tokens: ports.session_tokens,
            permissions: ports.permissions,
            sessions: ports.sessions,
            catalog: ports.catalog,
            tokens: ports.tokens,
            events: ports.events,
            gate: ResourceGate::new(),
        }
    }

    /// Name of the configured token store
    pub fn store_name(&self) -> &str {
        self.token_store.provider_name()
    }

    /// Resolve the principal authenticated on `session`
    async fn authenticated(&self, session: &SessionId) -> Result<Principal> {
        self.sessions.principal(session).await?.ok_or_else(|| {
            warn!(session = %session, "Rejected request from unauthenticated session");
            Error::unauthorized(format!("session {session} is not authenticated"))
        })
    }

    async fn ensure_exists(&self, resource: &ResourceId) -> Result<()> {
        if self.catalog.exists(resource).await? {
            Ok(())
        } else {
            Err(Error::not_found(resource.as_str()))
        }
    }

    /// Decide on whose authority `session` may release `lock`
    async fn release_authority(
        &self,
        lock: &Lock,
        session: &SessionId,
    ) -> Result<ReleaseAuthority> {
        let principal = self.authenticated(session).await?;

        if self.session_tokens.contains(session, &lock.token).await? {
            return Ok(ReleaseAuthority::TokenHolder { principal });
        }

        if self
            .permissions
            .can_override_lock(&principal, &lock.resource)
            .await?
        {
            return Ok(ReleaseAuthority::Override { principal });
        }

        warn!(
            resource = %lock.resource,
            principal = %principal,
            owner = %lock.owner,
            "Unlock denied: session holds no token and has no override"
        );
        Err(Error::unauthorized(format!(
            "{principal} cannot unlock {}: lock token not held and no override permission",
            lock.resource
        )))
    }

    /// Remove `lock` if it is still the lock in effect, then purge its token
    ///
    /// Returns `false` when the lock was already released or replaced.
    async fn remove_lock(
        &self,
        lock: &Lock,
        session: Option<&SessionId>,
        authority: ReleaseAuthority,
    ) -> Result<bool> {
        let removed = {
            let _gate = self.gate.lock(&lock.resource).await;
            self.token_store
                .remove_if_token_matches(&lock.resource, &lock.token)
                .await?
        };
        if !removed {
            return Ok(false);
        }

        // The token is unique to the removed lock, so leftovers can never
        // unlock anything; a failed sweep only leaves dead entries behind.
        match self.session_tokens.purge_token(&lock.token).await {
            Ok(count) => debug!(resource = %lock.resource, sessions = count, "Purged lock token"),
            Err(e) => error!(resource = %lock.resource, error = %e, "Failed to purge lock token"),
        }

        match &authority {
            ReleaseAuthority::TokenHolder { principal } => info!(
                resource = %lock.resource,
                owner = %lock.owner,
                released_by = %principal,
                "Lock released by token holder"
            ),
            ReleaseAuthority::Override { principal } => warn!(
                resource = %lock.resource,
                owner = %lock.owner,
                released_by = %principal,
                "Lock released by override"
            ),
            ReleaseAuthority::System => info!(
                resource = %lock.resource,
                owner = %lock.owner,
                "Lock released by system"
            ),
        }

        self.publish(LockEvent::Released {
            lock: lock.info(),
            session: session.cloned(),
            authority,
        })
        .await;
        Ok(true)
    }

    async fn detach_quietly(&self, session: &SessionId, token: &LockToken) {
        if let Err(e) = self.session_tokens.remove(session, token).await {
            warn!(session = %session, error = %e, "Failed to detach lock token");
        }
    }

    async fn publish(&self, event: LockEvent) {
        if !self.events.has_subscribers() {
            return;
        }
        let name = event.name();
        if let Err(e) = self.events.publish(event).await {
            warn!(event = name, error = %e, "Failed to publish lock event");
        }
    }
}

fn validate_resource(resource: &ResourceId) -> Result<()> {
    if resource.is_blank() {
        return Err(Error::invalid_argument("resource id cannot be empty"));
    }
    if resource.as_str().len() > MAX_RESOURCE_ID_BYTES {
        return Err(Error::invalid_argument(format!(
            "resource id exceeds {MAX_RESOURCE_ID_BYTES} bytes"
        )));
    }
    Ok(())
}

fn validate_message(message: Option<&str>) -> Result<()> {
    if let Some(message) = message {
        if message.chars().count() > MAX_LOCK_MESSAGE_CHARS {
            return Err(Error::invalid_argument(format!(
                "lock message exceeds {MAX_LOCK_MESSAGE_CHARS} characters"
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl LockServiceInterface for LockService {
    async fn acquire(
        &self,
        resource: &ResourceId,
        caller: &Caller,
        message: Option<String>,
    ) -> Result<Lock> {
        validate_resource(resource)?;
        validate_message(message.as_deref())?;

        let principal = self.authenticated(&caller.session).await?;
        if principal != caller.principal {
            warn!(
                session = %caller.session,
                claimed = %caller.principal,
                actual = %principal,
                "Lock request principal does not match session"
            );
            return Err(Error::unauthorized(format!(
                "session {} is not authenticated as {}",
                caller.session, caller.principal
            )));
        }
        self.ensure_exists(resource).await?;
        if !self.permissions.can_lock(&principal, resource).await? {
            return Err(Error::unauthorized(format!(
                "{principal} may not lock {resource}"
            )));
        }

        let lock = Lock::new(
            resource.clone(),
            principal,
            message,
            self.tokens.generate(),
        );

        {
            let _gate = self.gate.lock(resource).await;
            // Attach first: an interrupted acquire can leave a token that
            // matches no lock, but never a lock no session can release.
            self.session_tokens
                .add(&caller.session, lock.token.clone())
                .await?;
            match self.token_store.put_if_absent(lock.clone()).await {
                Ok(None) => {}
                Ok(Some(existing)) => {
                    self.detach_quietly(&caller.session, &lock.token).await;
                    debug!(
                        resource = %resource,
                        owner = %existing.owner,
                        requested_by = %lock.owner,
                        "Lock request conflicts with existing lock"
                    );
                    return Err(Error::already_locked(existing.info()));
                }
                // The write may have committed; keep the token attached so the
                // caller can still release after re-querying.
                Err(e) => {
                    error!(resource = %resource, error = %e, "Failed to store lock");
                    return Err(e);
                }
            }
        }

        info!(
            resource = %resource,
            owner = %lock.owner,
            session = %caller.session,
            "Lock acquired"
        );
        debug!(resource = %resource, token = %lock.token.fingerprint(), "Issued lock token");
        self.publish(LockEvent::Acquired {
            lock: lock.info(),
            session: caller.session.clone(),
        })
        .await;
        Ok(lock)
    }

    async fn release(&self, resource: &ResourceId, session: &SessionId) -> Result<()> {
        let lock = self
            .token_store
            .get(resource)
            .await?
            .ok_or_else(|| Error::not_locked(resource.as_str()))?;
        let authority = self.release_authority(&lock, session).await?;

        if self.remove_lock(&lock, Some(session), authority).await? {
            Ok(())
        } else {
            // Released or replaced between the read and the conditional remove
            Err(Error::not_locked(resource.as_str()))
        }
    }

    async fn attach_existing_token(
        &self,
        resource: &ResourceId,
        session: &SessionId,
    ) -> Result<()> {
        let principal = self.authenticated(session).await?;
        let Some(lock) = self.token_store.get(resource).await? else {
            debug!(resource = %resource, "Resource not locked, no token to attach");
            return Ok(());
        };

        if lock.owner != principal
            && !self
                .permissions
                .can_override_lock(&principal, resource)
                .await?
        {
            warn!(
                resource = %resource,
                principal = %principal,
                owner = %lock.owner,
                "Token attach denied"
            );
            return Err(Error::unauthorized(format!(
                "{principal} may not take over the lock on {resource}"
            )));
        }

        {
            let _gate = self.gate.lock(resource).await;
            let current = self.token_store.get(resource).await?;
            if current.as_ref().map(|c| &c.token) != Some(&lock.token) {
                debug!(resource = %resource, "Lock changed before token could be attached");
                return Ok(());
            }
            self.session_tokens.add(session, lock.token.clone()).await?;
        }

        info!(
            resource = %resource,
            session = %session,
            principal = %principal,
            owner = %lock.owner,
            "Lock token attached to session"
        );
        self.publish(LockEvent::TokenAttached {
            resource: resource.clone(),
            session: session.clone(),
            principal,
        })
        .await;
        Ok(())
    }

    async fn detach_token(&self, resource: &ResourceId, session: &SessionId) {
        let lock = match self.token_store.get(resource).await {
            Ok(Some(lock)) => lock,
            Ok(None) => return,
            Err(e) => {
                warn!(resource = %resource, error = %e, "Failed to read lock for detach");
                return;
            }
        };

        match self.session_tokens.remove(session, &lock.token).await {
            Ok(true) => {
                debug!(resource = %resource, session = %session, "Lock token detached");
                self.publish(LockEvent::TokenDetached {
                    resource: resource.clone(),
                    session: session.clone(),
                })
                .await;
            }
            Ok(false) => {}
            Err(e) => warn!(session = %session, error = %e, "Failed to detach lock token"),
        }
    }

    async fn query(&self, resource: &ResourceId, session: &SessionId) -> Result<Option<LockInfo>> {
        let principal = self.authenticated(session).await?;
        self.ensure_exists(resource).await?;
        if !self.permissions.can_read(&principal, resource).await? {
            return Err(Error::unauthorized(format!(
                "{principal} may not read {resource}"
            )));
        }
        Ok(self.token_store.get(resource).await?.map(|lock| lock.info()))
    }

    async fn end_session(&self, session: &SessionId) -> Result<usize> {
        let detached = self.session_tokens.remove_all(session).await?.len();
        debug!(session = %session, tokens = detached, "Session ended");
        self.publish(LockEvent::SessionEnded {
            session: session.clone(),
            tokens_detached: detached,
        })
        .await;
        Ok(detached)
    }

    async fn resource_deleted(&self, resource: &ResourceId) -> Result<Option<LockInfo>> {
        // A concurrent acquire may replace the lock between read and remove;
        // keep going until the resource is observed unlocked.
        while let Some(lock) = self.token_store.get(resource).await? {
            if self
                .remove_lock(&lock, None, ReleaseAuthority::System)
                .await?
            {
                return Ok(Some(lock.info()));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl LockAdminInterface for LockService {
    async fn force_unlock(
        &self,
        resource: &ResourceId,
        admin_session: &SessionId,
    ) -> Result<LockInfo> {
        let principal = self.authenticated(admin_session).await?;
        let lock = self
            .token_store
            .get(resource)
            .await?
            .ok_or_else(|| Error::not_locked(resource.as_str()))?;

        if !self
            .permissions
            .can_override_lock(&principal, resource)
            .await?
        {
            warn!(resource = %resource, principal = %principal, "Force unlock denied");
            return Err(Error::unauthorized(format!(
                "{principal} has no override permission on {resource}"
            )));
        }

        let authority = ReleaseAuthority::Override { principal };
        if self
            .remove_lock(&lock, Some(admin_session), authority)
            .await?
        {
            Ok(lock.info())
        } else {
            Err(Error::not_locked(resource.as_str()))
        }
    }

    async fn list_locks(&self, admin_session: &SessionId) -> Result<Vec<LockInfo>> {
        let principal = self.authenticated(admin_session).await?;
        let mut visible = Vec::new();
        for lock in self.token_store.list().await? {
            if self
                .permissions
                .can_override_lock(&principal, &lock.resource)
                .await?
            {
                visible.push(lock.info());
            }
        }
        visible.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.resource.as_str().cmp(b.resource.as_str()))
        });
        Ok(visible)
    }
}
