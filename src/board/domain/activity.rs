//! Activity log entries describing user-visible board mutations.

use super::{EntryId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One line in the board's recent-activity feed.
///
/// Entries are immutable once created; the log only ever prepends new ones
/// and evicts the oldest. Messages interpolate the task title as it was
/// when the mutation happened, so later renames do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    id: EntryId,
    message: String,
    timestamp: DateTime<Utc>,
}

impl LogEntry {
    fn new(message: String, clock: &impl Clock) -> Self {
        Self {
            id: EntryId::new(),
            message,
            timestamp: clock.utc(),
        }
    }

    /// Entry recording a task creation.
    #[must_use]
    pub fn task_created(title: &str, clock: &impl Clock) -> Self {
        Self::new(format!("Task '{title}' created"), clock)
    }

    /// Entry recording a task moving to another column.
    #[must_use]
    pub fn task_moved(title: &str, destination: TaskStatus, clock: &impl Clock) -> Self {
        Self::new(format!("Task '{title}' moved to {destination}"), clock)
    }

    /// Entry recording an edit to a task's fields.
    #[must_use]
    pub fn task_edited(title: &str, clock: &impl Clock) -> Self {
        Self::new(format!("Task '{title}' edited"), clock)
    }

    /// Entry recording a task deletion.
    #[must_use]
    pub fn task_deleted(title: &str, clock: &impl Clock) -> Self {
        Self::new(format!("Task '{title}' deleted"), clock)
    }

    /// Entry recording the board being wiped back to empty.
    #[must_use]
    pub fn board_reset(clock: &impl Clock) -> Self {
        Self::new("Board reset".to_owned(), clock)
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the human-readable description of the mutation.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the time the mutation happened.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
