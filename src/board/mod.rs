//! Board state management for Corkboard.
//!
//! This module owns the board aggregate: the ordered task collection, the
//! capped activity log, and the derived filtered/sorted view the columns
//! render from. Mutations flow exclusively through the board service, which
//! persists the whole aggregate after every change. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]
//!
//! Persistence ports and adapters are shared with the session context and
//! live in [`crate::storage`].

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
