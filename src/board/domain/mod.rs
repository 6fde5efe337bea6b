//! Domain model for the board context.
//!
//! Pure types and functions only: nothing here touches storage or the
//! clock beyond accepting one as an argument. The aggregate root is
//! [`Board`]; everything the columns display is derived on demand via
//! [`derive_view`] and [`derive_column`].

mod activity;
mod board;
mod drag;
mod error;
mod ids;
mod priority;
mod status;
mod task;
mod view;

pub use activity::LogEntry;
pub use board::{Board, LOG_CAPACITY};
pub use drag::{DropTarget, resolve_drop};
pub use error::{ParsePriorityError, ParseStatusError};
pub use ids::{EntryId, TaskId};
pub use priority::Priority;
pub use status::TaskStatus;
pub use task::{Task, TaskDraft, TaskPatch};
pub use view::{PriorityFilter, SortOrder, ViewQuery, derive_column, derive_view};
