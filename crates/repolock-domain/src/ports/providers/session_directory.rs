//! Session Directory Port
//!
//! Identity of the principal behind each live session, as maintained by the
//! security subsystem.

use crate::error::Result;
use crate::value_objects::{Principal, SessionId};
use async_trait::async_trait;

/// Lookup of the authenticated principal for a session
#[async_trait]
pub trait SessionDirectory: Send + Sync {
    /// Principal authenticated on `session`, or `None` if the session is
    /// unknown or logged out
    async fn principal(&self, session: &SessionId) -> Result<Option<Principal>>;
}
