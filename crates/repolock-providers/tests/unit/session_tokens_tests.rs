//! Tests for the in-memory session token cache

use repolock_domain::ports::SessionTokenCache;
use repolock_domain::value_objects::{LockToken, SessionId};
use repolock_providers::InMemorySessionTokenCache;

#[tokio::test]
async fn test_add_is_idempotent() {
    let cache = InMemorySessionTokenCache::new();
    let session = SessionId::new("s1");
    cache.add(&session, LockToken::new("t")).await.unwrap();
    cache.add(&session, LockToken::new("t")).await.unwrap();

    assert_eq!(cache.tokens(&session).await.unwrap().len(), 1);
    assert!(cache.contains(&session, &LockToken::new("t")).await.unwrap());
}

#[tokio::test]
async fn test_remove_reports_whether_attached() {
    let cache = InMemorySessionTokenCache::new();
    let session = SessionId::new("s1");
    cache.add(&session, LockToken::new("t")).await.unwrap();

    assert!(cache.remove(&session, &LockToken::new("t")).await.unwrap());
    assert!(!cache.remove(&session, &LockToken::new("t")).await.unwrap());
    assert_eq!(cache.session_count(), 0);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let cache = InMemorySessionTokenCache::new();
    let (a, b) = (SessionId::new("a"), SessionId::new("b"));
    cache.add(&a, LockToken::new("t")).await.unwrap();

    assert!(!cache.contains(&b, &LockToken::new("t")).await.unwrap());
}

#[tokio::test]
async fn test_remove_all_returns_detached_tokens() {
    let cache = InMemorySessionTokenCache::new();
    let session = SessionId::new("s1");
    cache.add(&session, LockToken::new("t1")).await.unwrap();
    cache.add(&session, LockToken::new("t2")).await.unwrap();

    assert_eq!(cache.remove_all(&session).await.unwrap().len(), 2);
    assert!(cache.remove_all(&session).await.unwrap().is_empty());
    assert!(cache.tokens(&session).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_purge_token_detaches_from_every_session() {
    let cache = InMemorySessionTokenCache::new();
    let shared = LockToken::new("shared");
    for name in ["a", "b", "c"] {
        cache.add(&SessionId::new(name), shared.clone()).await.unwrap();
    }
    cache
        .add(&SessionId::new("a"), LockToken::new("other"))
        .await
        .unwrap();

    assert_eq!(cache.purge_token(&shared).await.unwrap(), 3);
    assert_eq!(cache.session_count(), 1);
    assert!(cache
        .contains(&SessionId::new("a"), &LockToken::new("other"))
        .await
        .unwrap());
}
