//! Login attempt outcomes.

use super::Identity;

/// Result of a login attempt.
///
/// A credential mismatch is an ordinary value, not an error: the outcome
/// carries the message the login form shows and nothing else happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched; this identity is now current.
    Success(Identity),
    /// Credentials did not match; nothing was mutated.
    Failure {
        /// Message for the login form to display.
        message: String,
    },
}

impl LoginOutcome {
    /// Returns `true` for a successful login.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the granted identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Success(identity) => Some(identity),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the user-facing failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message } => Some(message),
        }
    }
}
