//! Cryptographic utilities
//!
//! Lock tokens are the only secret this service mints.

pub mod token;

pub use token::SecureTokenGenerator;
