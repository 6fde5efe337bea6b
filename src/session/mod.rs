//! Session management for Corkboard.
//!
//! This module owns the login gate in front of the board: checking the
//! demo credential pair, keeping the logged-in identity, and persisting it
//! to the durable store for remember-me logins or the ephemeral store
//! otherwise. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]
//!
//! Persistence ports and adapters are shared with the board context and
//! live in [`crate::storage`].

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
