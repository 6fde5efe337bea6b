//! Application services for board state management.

mod manager;

pub use manager::{BOARD_KEY, BoardService};
