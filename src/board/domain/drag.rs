//! Drop-target resolution for drag-and-drop card moves.

use super::{Task, TaskId, TaskStatus};

/// Where a dragged card was released.
///
/// Drag gestures report either a column's drop surface or another card;
/// the board only ever needs the destination column out of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Released over a column's drop surface.
    Column(TaskStatus),
    /// Released over another card.
    Card(TaskId),
}

/// Resolves a drop target to the column the dragged card should land in.
///
/// A column target resolves to itself; a card target adopts that card's
/// current column. Returns `None` when the target card is not on the
/// board, in which case the gesture is abandoned.
#[must_use]
pub fn resolve_drop(tasks: &[Task], target: DropTarget) -> Option<TaskStatus> {
    match target {
        DropTarget::Column(status) => Some(status),
        DropTarget::Card(id) => tasks.iter().find(|task| task.id() == id).map(Task::status),
    }
}
