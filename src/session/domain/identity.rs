//! Logged-in identity snapshot.

use serde::{Deserialize, Serialize};

/// The identity a successful login grants.
///
/// This is the value persisted under the session key and handed to the
/// embedding UI for its header; it carries no secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Email address the session was opened with.
    pub email: String,
    /// Display name shown while logged in.
    pub name: String,
}
