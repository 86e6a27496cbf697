//! Tests for administrative lock operations

use crate::test_utils::{Harness, res};
use futures::StreamExt;
use repolock_application::{LockAdminInterface, LockServiceInterface};
use repolock_domain::error::Error;
use repolock_domain::events::{LockEvent, ReleaseAuthority};
use repolock_domain::value_objects::SessionId;
use repolock_providers::StaticPermissionOracle;
use std::time::Duration;

fn admin_harness() -> Harness {
    Harness::builder()
        .permissions(
            StaticPermissionOracle::new()
                .with_admin("root")
                .with_override("/trunk/shared.txt", "lead"),
        )
        .build()
}

#[tokio::test]
async fn test_force_unlock_by_admin() {
    let h = admin_harness();
    let bob = h.login("bob");
    let root = h.login("root");
    let resource = res("/trunk/main.c");
    let mut events = h.events();

    let lock = h
        .service
        .acquire(&resource, &bob, Some("vacation".into()))
        .await
        .unwrap();
    let removed = h.service.force_unlock(&resource, &root.session).await.unwrap();
    assert_eq!(removed, lock.info());
    assert!(h.tokens_of(&bob.session).await.is_empty());

    let _acquired = events.next().await;
    match events.next().await {
        Some(LockEvent::Released {
            authority: ReleaseAuthority::Override { principal },
            ..
        }) => assert_eq!(principal.as_str(), "root"),
        other => panic!("expected override release, got {other:?}"),
    }

    // The resource can be locked again immediately
    h.service.acquire(&resource, &root, None).await.unwrap();
}

#[tokio::test]
async fn test_force_unlock_denied_without_override() {
    let h = admin_harness();
    let bob = h.login("bob");
    let carol = h.login("carol");
    let resource = res("/trunk/main.c");

    h.service.acquire(&resource, &bob, None).await.unwrap();
    let result = h.service.force_unlock(&resource, &carol.session).await;
    assert!(matches!(result, Err(Error::Unauthorized { .. })));
}

#[tokio::test]
async fn test_force_unlock_even_by_owner_needs_override() {
    let h = admin_harness();
    let bob = h.login("bob");
    let resource = res("/trunk/main.c");

    h.service.acquire(&resource, &bob, None).await.unwrap();
    let result = h.service.force_unlock(&resource, &bob.session).await;
    assert!(matches!(result, Err(Error::Unauthorized { .. })));
}

#[tokio::test]
async fn test_force_unlock_unlocked_resource() {
    let h = admin_harness();
    let root = h.login("root");
    let result = h.service.force_unlock(&res("/trunk/a.txt"), &root.session).await;
    assert!(matches!(result, Err(Error::NotLocked { .. })));
}

#[tokio::test]
async fn test_force_unlock_requires_authentication() {
    let h = admin_harness();
    let result = h
        .service
        .force_unlock(&res("/trunk/a.txt"), &SessionId::new("nobody"))
        .await;
    assert!(matches!(result, Err(Error::Unauthorized { .. })));
}

#[tokio::test]
async fn test_list_locks_filters_by_override_permission() {
    let h = admin_harness();
    let alice = h.login("alice");
    let root = h.login("root");
    let lead = h.login("lead");

    for path in ["/trunk/c.txt", "/trunk/shared.txt", "/trunk/a.txt"] {
        h.service.acquire(&res(path), &alice, None).await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;
    }

    let all = h.service.list_locks(&root.session).await.unwrap();
    let paths: Vec<&str> = all.iter().map(|info| info.resource.as_str()).collect();
    // Oldest first
    assert_eq!(paths, vec!["/trunk/c.txt", "/trunk/shared.txt", "/trunk/a.txt"]);

    let visible = h.service.list_locks(&lead.session).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].resource.as_str(), "/trunk/shared.txt");

    assert!(h.service.list_locks(&alice.session).await.unwrap().is_empty());
}
