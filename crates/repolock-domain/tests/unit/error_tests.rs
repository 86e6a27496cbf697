//! Unit tests for domain error types

use chrono::Utc;
use repolock_domain::{Error, LockInfo, Principal, ResourceId};

fn sample_info() -> LockInfo {
    LockInfo {
        resource: ResourceId::new("file-1"),
        owner: Principal::new("bob"),
        message: Some("editing".to_string()),
        created_at: Utc::now(),
    }
}

#[test]
fn test_already_locked_carries_current_holder() {
    let error = Error::already_locked(sample_info());
    let info = error.current_lock().expect("lock info");
    assert_eq!(info.owner.as_str(), "bob");
    assert_eq!(info.message.as_deref(), Some("editing"));

    let display_str = format!("{}", error);
    assert!(display_str.contains("bob"));
    assert!(display_str.contains("editing"));
}

#[test]
fn test_not_locked_error() {
    let error = Error::not_locked("file-1");
    match error {
        Error::NotLocked { resource } => assert_eq!(resource, "file-1"),
        _ => panic!("Expected NotLocked error"),
    }
}

#[test]
fn test_unauthorized_error() {
    let error = Error::unauthorized("no token");
    match error {
        Error::Unauthorized { message } => assert_eq!(message, "no token"),
        _ => panic!("Expected Unauthorized error"),
    }
}

#[test]
fn test_storage_error_with_source() {
    let io = std::io::Error::other("disk gone");
    let error = Error::storage_with_source("write failed", io);
    assert!(std::error::Error::source(&error).is_some());
    assert!(format!("{}", error).contains("write failed"));
}

#[test]
fn test_only_storage_errors_are_retryable() {
    assert!(Error::storage("timeout").is_retryable());
    assert!(!Error::not_locked("r").is_retryable());
    assert!(!Error::unauthorized("u").is_retryable());
    assert!(!Error::not_found("r").is_retryable());
    assert!(!Error::already_locked(sample_info()).is_retryable());
}

#[test]
fn test_current_lock_absent_for_other_errors() {
    assert!(Error::not_found("r").current_lock().is_none());
}
