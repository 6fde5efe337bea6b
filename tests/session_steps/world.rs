//! Shared world state for session login BDD scenarios.

use std::sync::Arc;

use corkboard::session::domain::{DemoCredentials, LoginOutcome};
use corkboard::session::services::{SESSION_KEY, SessionService};
use corkboard::storage::adapters::MemoryStore;
use corkboard::storage::ports::BlobStore;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestSessionService = SessionService<MemoryStore, MemoryStore>;

/// Scenario world for session behaviour tests.
pub struct SessionWorld {
    pub durable: Arc<MemoryStore>,
    pub ephemeral: Arc<MemoryStore>,
    pub service: TestSessionService,
    pub last_outcome: Option<LoginOutcome>,
}

impl SessionWorld {
    /// Creates a world over fresh stores with the demo credentials.
    #[must_use]
    pub fn new() -> Self {
        let durable = Arc::new(MemoryStore::new());
        let ephemeral = Arc::new(MemoryStore::new());
        let service = SessionService::new(
            Arc::clone(&durable),
            Arc::clone(&ephemeral),
            DemoCredentials::default(),
        );
        Self {
            durable,
            ephemeral,
            service,
            last_outcome: None,
        }
    }

    /// Replaces the service and the ephemeral store, as a fresh
    /// application run would; the durable store carries over.
    pub fn restart(&mut self) {
        self.ephemeral = Arc::new(MemoryStore::new());
        self.service = SessionService::new(
            Arc::clone(&self.durable),
            Arc::clone(&self.ephemeral),
            DemoCredentials::default(),
        );
    }

    /// Returns whether the given store currently holds an identity blob.
    pub fn store_holds_identity(store: &MemoryStore) -> Result<bool, eyre::Report> {
        Ok(store.read(SESSION_KEY)?.is_some())
    }
}

impl Default for SessionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SessionWorld {
    SessionWorld::default()
}
