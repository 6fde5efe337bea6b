//! Board state manager: task CRUD, activity logging, and write-through
//! persistence.

use crate::board::domain::{
    Board, DropTarget, LogEntry, Task, TaskDraft, TaskId, TaskPatch, TaskStatus, ViewQuery,
    derive_column, derive_view, resolve_drop,
};
use crate::storage::{codec, ports::BlobStore};
use mockable::Clock;
use std::sync::Arc;

/// Storage key the board aggregate is persisted under.
pub const BOARD_KEY: &str = "task_board";

/// Sole writable owner of the board aggregate.
///
/// One manager exists per running application, created at startup by
/// hydrating from the store. Every mutating operation is synchronous and
/// immediately consistent: the change is applied in memory, logged, and
/// the whole aggregate written through to storage before the call
/// returns. Persistence failures are logged and swallowed; the in-memory
/// board remains authoritative for the rest of the run.
pub struct BoardService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    board: Board,
}

impl<S, C> BoardService<S, C>
where
    S: BlobStore,
    C: Clock + Send + Sync,
{
    /// Creates the manager by hydrating the board from `store`.
    ///
    /// An absent, unreadable, or unparsable blob hydrates into the empty
    /// board.
    #[must_use]
    pub fn hydrate(store: Arc<S>, clock: Arc<C>) -> Self {
        let board = codec::load_or_default(&*store, BOARD_KEY, Board::default());
        tracing::debug!(
            tasks = board.tasks().len(),
            logs = board.logs().len(),
            "board hydrated"
        );
        Self {
            store,
            clock,
            board,
        }
    }

    /// Adds a task built from `draft` and returns its identifier.
    ///
    /// The task lands at the end of the display order and one `created`
    /// entry is logged. Draft contents are taken as supplied; rejecting
    /// blank titles is the form layer's concern.
    pub fn add_task(&mut self, draft: TaskDraft) -> TaskId {
        let task = Task::from_draft(draft, &*self.clock);
        let id = task.id();
        let entry = LogEntry::task_created(task.title(), &*self.clock);
        self.board.push_task(task);
        self.board.record(entry);
        self.persist();
        tracing::debug!(task_id = %id, "task created");
        id
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// An unknown id is ignored without logging or persisting. Otherwise
    /// exactly one entry is recorded: a move when the patch carries a
    /// column different from the task's current one, an edit in every
    /// other case. The entry carries the title as it was before the
    /// merge.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) {
        let Some(task) = self.board.task_mut(id) else {
            tracing::debug!(task_id = %id, "update for unknown task ignored");
            return;
        };
        let title = task.title().to_owned();
        let moved_to = patch.status().filter(|&status| status != task.status());
        task.apply(patch);
        let entry = moved_to.map_or_else(
            || LogEntry::task_edited(&title, &*self.clock),
            |destination| LogEntry::task_moved(&title, destination, &*self.clock),
        );
        self.board.record(entry);
        self.persist();
        tracing::debug!(task_id = %id, moved = moved_to.is_some(), "task updated");
    }

    /// Deletes the task with `id`.
    ///
    /// An unknown id is ignored without logging or persisting.
    pub fn delete_task(&mut self, id: TaskId) {
        let Some(task) = self.board.remove_task(id) else {
            tracing::debug!(task_id = %id, "delete for unknown task ignored");
            return;
        };
        let entry = LogEntry::task_deleted(task.title(), &*self.clock);
        self.board.record(entry);
        self.persist();
        tracing::debug!(task_id = %id, "task deleted");
    }

    /// Replaces the board with the empty aggregate.
    ///
    /// Afterwards the activity log contains exactly the reset entry.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.board.record(LogEntry::board_reset(&*self.clock));
        self.persist();
        tracing::debug!("board reset");
    }

    /// Completes a drag of the task with `id` released on `target`.
    ///
    /// The target is resolved to a destination column and the task moved
    /// there via [`Self::update_task`] only when that column differs from
    /// its current one. Same-column and unresolvable drops leave the
    /// board untouched, with no log entry and no persistence write.
    pub fn complete_drag(&mut self, id: TaskId, target: DropTarget) {
        let Some(destination) = resolve_drop(self.board.tasks(), target) else {
            tracing::debug!(task_id = %id, "drop target not resolvable, drag abandoned");
            return;
        };
        let Some(current) = self.board.task(id).map(Task::status) else {
            tracing::debug!(task_id = %id, "drag for unknown task ignored");
            return;
        };
        if current != destination {
            self.update_task(id, TaskPatch::new().with_status(destination));
        }
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.board.tasks()
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.board.task(id)
    }

    /// Returns the activity log, newest entry first.
    #[must_use]
    pub fn logs(&self) -> &[LogEntry] {
        self.board.logs()
    }

    /// Returns the whole aggregate.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Projects the filtered, sorted display view.
    #[must_use]
    pub fn view(&self, query: &ViewQuery) -> Vec<&Task> {
        derive_view(self.board.tasks(), query)
    }

    /// Projects the display view narrowed to one column.
    #[must_use]
    pub fn column(&self, query: &ViewQuery, status: TaskStatus) -> Vec<&Task> {
        derive_column(self.board.tasks(), query, status)
    }

    fn persist(&self) {
        codec::save(&*self.store, BOARD_KEY, &self.board);
    }
}
