//! Session manager: the demo login gate and identity persistence.

use crate::session::domain::{DemoCredentials, Identity, LoginOutcome};
use crate::storage::{codec, ports::BlobStore};
use std::sync::Arc;

/// Storage key the identity is persisted under in either store.
pub const SESSION_KEY: &str = "auth_user";

/// Message shown when a credential pair is rejected.
const REJECTION_MESSAGE: &str = "Hmm... that doesn't look right 😅";

/// Sole owner of the session identity.
///
/// Holds two stores side by side, mirroring a browser's local and session
/// storage: remember-me logins go to the durable store and survive a
/// restart, plain logins go to the ephemeral store and do not. One
/// manager exists per running application.
pub struct SessionService<D, E>
where
    D: BlobStore,
    E: BlobStore,
{
    durable: Arc<D>,
    ephemeral: Arc<E>,
    credentials: DemoCredentials,
    current: Option<Identity>,
    ready: bool,
}

impl<D, E> SessionService<D, E>
where
    D: BlobStore,
    E: BlobStore,
{
    /// Creates the manager logged out and not yet ready.
    #[must_use]
    pub const fn new(durable: Arc<D>, ephemeral: Arc<E>, credentials: DemoCredentials) -> Self {
        Self {
            durable,
            ephemeral,
            credentials,
            current: None,
            ready: false,
        }
    }

    /// Attempts to open a session with the supplied credential pair.
    ///
    /// On a match the granted identity becomes current and is persisted,
    /// to the durable store when `remember_me` is set and to the
    /// ephemeral store otherwise. On a mismatch nothing is mutated and
    /// the outcome carries the message the login form shows.
    pub fn login(&mut self, email: &str, password: &str, remember_me: bool) -> LoginOutcome {
        if !self.credentials.matches(email, password) {
            tracing::debug!("login rejected");
            return LoginOutcome::Failure {
                message: REJECTION_MESSAGE.to_owned(),
            };
        }
        let identity = self.credentials.identity_for(email);
        self.current = Some(identity.clone());
        if remember_me {
            codec::save(&*self.durable, SESSION_KEY, &identity);
        } else {
            codec::save(&*self.ephemeral, SESSION_KEY, &identity);
        }
        tracing::debug!(remember_me, "login accepted");
        LoginOutcome::Success(identity)
    }

    /// Closes the session and removes the identity from both stores.
    ///
    /// Already being logged out is fine; the stores are cleared either
    /// way.
    pub fn logout(&mut self) {
        self.current = None;
        codec::discard(&*self.durable, SESSION_KEY);
        codec::discard(&*self.ephemeral, SESSION_KEY);
        tracing::debug!("logged out");
    }

    /// Hydrates the identity a remembered login persisted.
    ///
    /// Called once at startup. Only the durable store is consulted, so a
    /// login without remember-me does not survive into a new run. Marks
    /// the manager ready whether or not an identity was found, letting
    /// the embedding UI tell "still restoring" apart from "checked, and
    /// logged out".
    pub fn restore_session(&mut self) {
        self.current = codec::load_or_default(&*self.durable, SESSION_KEY, None);
        self.ready = true;
        tracing::debug!(restored = self.current.is_some(), "session restored");
    }

    /// Returns the logged-in identity, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Returns `true` while an identity is current.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Returns `true` once the startup restore attempt has run.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }
}
