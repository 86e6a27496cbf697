//! Error Extension Tests

use repolock_domain::error::{Error, Result};
use repolock_infrastructure::error_ext::ErrorContext;
use std::io;

fn io_failure() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
}

#[test]
fn test_storage_context() {
    let result: Result<()> = io_failure().storage_context("failed to write lock");
    match result {
        Err(Error::Storage { message, source }) => {
            assert!(message.contains("failed to write lock"));
            assert!(message.contains("denied"));
            assert!(source.is_some());
        }
        other => panic!("Expected Storage error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = io_failure().config_context("bad config");
    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_ok_passes_through() {
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.storage_context("unused").unwrap(), 7);
}
