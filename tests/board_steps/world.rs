//! Shared world state for board lifecycle BDD scenarios.

use std::sync::Arc;

use corkboard::board::domain::{Task, TaskId, TaskStatus};
use corkboard::board::services::BoardService;
use corkboard::storage::adapters::MemoryStore;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<MemoryStore, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub store: Arc<MemoryStore>,
    pub service: TestBoardService,
}

impl BoardWorld {
    /// Creates a world over a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let service = BoardService::hydrate(Arc::clone(&store), Arc::new(DefaultClock));
        Self { store, service }
    }

    /// Replaces the service with one hydrated from the same store, as a
    /// fresh application run would.
    pub fn restart(&mut self) {
        self.service = BoardService::hydrate(Arc::clone(&self.store), Arc::new(DefaultClock));
    }

    /// Looks up a task's identifier by its title.
    pub fn id_of(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.service
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }

    /// Parses a column name as used in feature files.
    pub fn column_named(name: &str) -> Result<TaskStatus, eyre::Report> {
        TaskStatus::try_from(name).map_err(|err| eyre::eyre!("unknown column in scenario: {err}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
