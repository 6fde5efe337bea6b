//! Derived display view over the task collection.
//!
//! The stored task order never changes; filtering and sorting are applied
//! on demand, per render, over borrowed tasks. Both sorts are stable, so
//! tasks that compare equal keep their insertion order.

use super::{Priority, Task, TaskStatus};
use std::cmp::{Ordering, Reverse};

/// Priority gate applied by the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Every priority passes.
    #[default]
    All,
    /// Only the given priority passes.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns `true` when a task of `priority` passes the gate.
    #[must_use]
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

/// Ordering applied to the filtered tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Due date ascending; tasks without a due date sort after every dated
    /// one.
    #[default]
    DueDate,
    /// Creation time descending, newest first.
    CreatedAt,
}

/// The view inputs: search text, priority gate, and sort order.
///
/// The default query shows every task in due-date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    search: String,
    priority: PriorityFilter,
    sort: SortOrder,
}

impl ViewQuery {
    /// Creates the everything-visible default query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title search text, matched as a case-insensitive
    /// substring.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the priority gate.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Projects the filtered, sorted view of `tasks`.
///
/// A task is included when its title contains the query's search text as a
/// case-insensitive substring and its priority passes the gate. The
/// projection borrows from `tasks` and never reorders the underlying
/// collection.
#[must_use]
pub fn derive_view<'t>(tasks: &'t [Task], query: &ViewQuery) -> Vec<&'t Task> {
    let needle = query.search.to_lowercase();
    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|task| {
            task.title().to_lowercase().contains(&needle)
                && query.priority.matches(task.priority())
        })
        .collect();
    match query.sort {
        SortOrder::DueDate => view.sort_by(|left, right| due_date_order(left, right)),
        SortOrder::CreatedAt => view.sort_by_key(|task| Reverse(task.created_at())),
    }
    view
}

/// Projects the derived view narrowed to one column.
#[must_use]
pub fn derive_column<'t>(
    tasks: &'t [Task],
    query: &ViewQuery,
    status: TaskStatus,
) -> Vec<&'t Task> {
    let mut view = derive_view(tasks, query);
    view.retain(|task| task.status() == status);
    view
}

/// Orders two tasks by due date, date-less tasks last.
fn due_date_order(left: &Task, right: &Task) -> Ordering {
    match (left.due_date(), right.due_date()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(first), Some(second)) => first.cmp(&second),
    }
}
