//! Tests for the in-memory session directory

use repolock_domain::ports::SessionDirectory;
use repolock_domain::value_objects::SessionId;
use repolock_providers::InMemorySessionDirectory;

#[tokio::test]
async fn test_login_issues_distinct_sessions() {
    let directory = InMemorySessionDirectory::new();
    let a = directory.login("alice");
    let b = directory.login("alice");
    assert_ne!(a, b);
    assert_eq!(directory.len(), 2);
    assert_eq!(
        directory.principal(&a).await.unwrap().unwrap().as_str(),
        "alice"
    );
}

#[tokio::test]
async fn test_logout_removes_session() {
    let directory = InMemorySessionDirectory::new();
    directory.login_as("s1", "bob");

    let session = SessionId::new("s1");
    assert_eq!(directory.logout(&session).unwrap().as_str(), "bob");
    assert!(directory.principal(&session).await.unwrap().is_none());
    assert!(directory.logout(&session).is_none());
}
