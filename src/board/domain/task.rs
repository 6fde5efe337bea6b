//! Task aggregate member and its creation and update payloads.

use super::{Priority, TaskId, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A card on the board.
///
/// Identity and `created_at` are assigned once at creation and never
/// change; everything else is edited through [`Task::apply`]. The
/// serialized form uses `camelCase` field names so blobs written by earlier
/// revisions of the application hydrate unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    priority: Priority,
    due_date: Option<NaiveDate>,
    tags: Vec<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from a draft.
    ///
    /// A fresh identifier is generated and `created_at` is read from
    /// `clock`; every other field is taken from the draft as supplied.
    #[must_use]
    pub fn from_draft(draft: TaskDraft, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            due_date: draft.due_date,
            tags: draft.tags,
            status: draft.status,
            created_at: clock.utc(),
        }
    }

    /// Merges `patch` into this task.
    ///
    /// Fields absent from the patch stay as they are; the identifier and
    /// creation time are never touched.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date, if set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the column the task sits in.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Field set for a new task, supplied by the embedding form.
///
/// Drafts are taken at face value: the board performs no validation here,
/// and rejecting blank titles is the form layer's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    priority: Priority,
    due_date: Option<NaiveDate>,
    tags: Vec<String>,
    status: TaskStatus,
}

impl TaskDraft {
    /// Creates a draft with the given title, `Medium` priority, the `Todo`
    /// column, and nothing else set.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description; blank input leaves it unset.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the tags, trimming each and dropping any left empty.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags
            .into_iter()
            .map(|tag| tag.into().trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }

    /// Sets the column the task starts in.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Partial update merged onto an existing task.
///
/// Only fields present in the patch overwrite; absent fields leave the
/// task unchanged. For the optional task fields the `with_*`/`clear_*`
/// setter pairs distinguish "set to a value" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<Option<String>>,
    priority: Option<Priority>,
    due_date: Option<Option<NaiveDate>>,
    tags: Option<Vec<String>>,
    status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Creates a patch that overwrites nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overwrites the description; blank input clears it instead.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = Some((!normalized.is_empty()).then_some(normalized.to_owned()));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Overwrites the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Overwrites the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Overwrites the tags, trimming each and dropping any left empty.
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(
            tags.into_iter()
                .map(|tag| tag.into().trim().to_owned())
                .filter(|tag| !tag.is_empty())
                .collect(),
        );
        self
    }

    /// Overwrites the column the task sits in.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the column this patch would move the task to, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns `true` when the patch overwrites nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.tags.is_none()
            && self.status.is_none()
    }
}
