//! Tests for lock service wiring

use futures::StreamExt;
use repolock_domain::error::Error;
use repolock_domain::events::LockEvent;
use repolock_domain::value_objects::{Caller, ResourceId};
use repolock_infrastructure::config::{AppConfig, ConfigBuilder};
use repolock_infrastructure::di::{LockContextBuilder, init_lock_service};
use repolock_providers::InMemorySessionDirectory;
use std::sync::Arc;

#[tokio::test]
async fn test_default_context_uses_memory_store() {
    let context = LockContextBuilder::new(AppConfig::default())
        .build()
        .await
        .unwrap();
    assert_eq!(context.lock_service().store_name(), "memory");
    assert!(context.events().is_some());
}

#[tokio::test]
async fn test_context_round_trip() {
    let sessions = Arc::new(InMemorySessionDirectory::new());
    let alice = sessions.login("alice");
    let context = init_lock_service(AppConfig::default(), sessions.clone(), None)
        .await
        .unwrap();

    let resource = ResourceId::new("/trunk/readme.txt");
    let mut events = context.subscribe().unwrap();

    let lock = context
        .service()
        .acquire(&resource, &Caller::new(alice.clone(), "alice"), None)
        .await
        .unwrap();
    assert_eq!(lock.owner.as_str(), "alice");
    assert!(matches!(events.next().await, Some(LockEvent::Acquired { .. })));

    context.service().release(&resource, &alice).await.unwrap();
    assert!(matches!(events.next().await, Some(LockEvent::Released { .. })));
    assert!(
        context
            .service()
            .query(&resource, &alice)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_configured_admins_can_override() {
    let sessions = Arc::new(InMemorySessionDirectory::new());
    let bob = sessions.login("bob");
    let root = sessions.login("root");
    let config = ConfigBuilder::new().with_admin("root").build().unwrap();
    let context = LockContextBuilder::new(config)
        .with_sessions(sessions.clone())
        .build()
        .await
        .unwrap();

    let resource = ResourceId::new("/trunk/build.rs");
    context
        .service()
        .acquire(&resource, &Caller::new(bob, "bob"), Some("refactor".into()))
        .await
        .unwrap();

    let removed = context.admin().force_unlock(&resource, &root).await.unwrap();
    assert_eq!(removed.owner.as_str(), "bob");
}

#[tokio::test]
async fn test_known_resources_catalog() {
    let sessions = Arc::new(InMemorySessionDirectory::new());
    let alice = sessions.login("alice");
    let context = init_lock_service(
        AppConfig::default(),
        sessions.clone(),
        Some(vec!["/trunk/a.txt".to_string()]),
    )
    .await
    .unwrap();

    let caller = Caller::new(alice, "alice");
    assert!(
        context
            .service()
            .acquire(&ResourceId::new("/trunk/a.txt"), &caller, None)
            .await
            .is_ok()
    );
    let missing = context
        .service()
        .acquire(&ResourceId::new("/trunk/b.txt"), &caller, None)
        .await;
    assert!(matches!(missing, Err(Error::NotFound { .. })));
}

#[tokio::test]
async fn test_events_disabled() {
    let mut config = AppConfig::default();
    config.locking.events_enabled = false;
    let context = LockContextBuilder::new(config).build().await.unwrap();
    assert!(context.events().is_none());
    assert!(context.subscribe().is_none());
}

#[tokio::test]
async fn test_filesystem_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new()
        .with_filesystem_store(dir.path())
        .build()
        .unwrap();
    let sessions = Arc::new(InMemorySessionDirectory::new());
    let alice = sessions.login("alice");
    let resource = ResourceId::new("/trunk/persisted.txt");

    {
        let context = init_lock_service(config.clone(), sessions.clone(), None)
            .await
            .unwrap();
        assert_eq!(context.lock_service().store_name(), "filesystem");
        context
            .service()
            .acquire(&resource, &Caller::new(alice.clone(), "alice"), None)
            .await
            .unwrap();
    }

    let context = init_lock_service(config, sessions.clone(), None)
        .await
        .unwrap();
    let info = context.service().query(&resource, &alice).await.unwrap();
    assert_eq!(info.unwrap().owner.as_str(), "alice");

    // The fresh session cache holds no token, so the owner must reattach
    let denied = context.service().release(&resource, &alice).await;
    assert!(matches!(denied, Err(Error::Unauthorized { .. })));
    context
        .service()
        .attach_existing_token(&resource, &alice)
        .await
        .unwrap();
    context.service().release(&resource, &alice).await.unwrap();
}

#[tokio::test]
async fn test_torn_record_does_not_wedge_resource() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigBuilder::new()
        .with_filesystem_store(dir.path())
        .with_admin("root")
        .build()
        .unwrap();
    let sessions = Arc::new(InMemorySessionDirectory::new());
    let alice = sessions.login("alice");
    let root = sessions.login("root");
    let resource = ResourceId::new("/trunk/torn.txt");

    {
        let context = init_lock_service(config.clone(), sessions.clone(), None)
            .await
            .unwrap();
        context
            .service()
            .acquire(&resource, &Caller::new(alice.clone(), "alice"), None)
            .await
            .unwrap();
    }

    // Simulate a crash that left a truncated record behind
    let record = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| p.to_string_lossy().ends_with(".lock.json"))
        .unwrap();
    std::fs::write(&record, b"{\"resource\":\"/tru").unwrap();

    let context = init_lock_service(config, sessions.clone(), None)
        .await
        .unwrap();
    assert!(context.service().query(&resource, &alice).await.unwrap().is_none());
    assert!(context.admin().list_locks(&root).await.unwrap().is_empty());

    let forced = context.admin().force_unlock(&resource, &root).await;
    assert!(matches!(forced, Err(Error::NotLocked { .. })));
    assert!(context.service().resource_deleted(&resource).await.unwrap().is_none());

    let lock = context
        .service()
        .acquire(&resource, &Caller::new(root.clone(), "root"), None)
        .await
        .unwrap();
    assert_eq!(lock.owner.as_str(), "root");
    context.admin().force_unlock(&resource, &root).await.unwrap();
}
