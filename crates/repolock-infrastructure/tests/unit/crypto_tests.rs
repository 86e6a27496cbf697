//! Tests for lock token generation

use repolock_domain::constants::MIN_TOKEN_BYTES;
use repolock_domain::ports::TokenGenerator;
use repolock_infrastructure::crypto::SecureTokenGenerator;
use std::collections::HashSet;

#[test]
fn test_default_token_length() {
    let generator = SecureTokenGenerator::default();
    assert_eq!(generator.bytes(), 32);
    // 32 bytes in unpadded base64 are 43 characters
    assert_eq!(generator.generate().expose().len(), 43);
}

#[test]
fn test_tokens_are_url_safe() {
    let generator = SecureTokenGenerator::new(64);
    for _ in 0..32 {
        let token = generator.generate();
        assert!(
            token
                .expose()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}

#[test]
fn test_tokens_are_unique() {
    let generator = SecureTokenGenerator::default();
    let tokens: HashSet<String> = (0..1000)
        .map(|_| generator.generate().expose().to_string())
        .collect();
    assert_eq!(tokens.len(), 1000);
}

#[test]
fn test_minimum_entropy_enforced() {
    let generator = SecureTokenGenerator::new(4);
    assert_eq!(generator.bytes(), MIN_TOKEN_BYTES);
}
