//! Application services for session management.

mod manager;

pub use manager::{SESSION_KEY, SessionService};
