//! The accepted credential pair and its display name.

use super::Identity;

/// The single credential pair the login gate accepts.
///
/// This is a demo gate, not a security boundary: the pair ships inside
/// the application and is checked by plain string equality, with no
/// hashing and no account store behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCredentials {
    email: String,
    password: String,
    display_name: String,
}

impl DemoCredentials {
    /// Creates a credential configuration.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            display_name: display_name.into(),
        }
    }

    /// Returns `true` when `email` and `password` both match exactly.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// Builds the identity a successful login with `email` grants.
    #[must_use]
    pub fn identity_for(&self, email: &str) -> Identity {
        Identity {
            email: email.to_owned(),
            name: self.display_name.clone(),
        }
    }
}

impl Default for DemoCredentials {
    /// The demo workspace login, `intern@demo.com` / `intern123`.
    fn default() -> Self {
        Self::new("intern@demo.com", "intern123", "Productivity Legend")
    }
}
