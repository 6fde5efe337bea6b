//! Board aggregate: the task collection plus the recent-activity log.

use super::{LogEntry, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Maximum number of activity entries a board retains.
pub const LOG_CAPACITY: usize = 10;

/// The persistence aggregate for one workspace.
///
/// Tasks are kept in insertion order; the activity log is kept newest
/// first and capped at [`LOG_CAPACITY`]. The whole aggregate is written to
/// storage as a single blob after every mutation, and `Default` is the
/// empty board that a fresh or unreadable store hydrates into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    tasks: Vec<Task>,
    logs: Vec<LogEntry>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            logs: Vec::new(),
        }
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the activity log, newest entry first.
    #[must_use]
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns a mutable handle to the task with `id`, if present.
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Appends a task to the end of the display order.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes and returns the task with `id`, if present.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(index))
    }

    /// Prepends an activity entry, evicting the oldest beyond
    /// [`LOG_CAPACITY`].
    pub fn record(&mut self, entry: LogEntry) {
        self.logs.insert(0, entry);
        self.logs.truncate(LOG_CAPACITY);
    }
}
