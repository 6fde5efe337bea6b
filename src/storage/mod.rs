//! Keyed blob persistence for board and session state.
//!
//! The storage context is the crate's only infrastructure boundary. Both
//! managers persist whole aggregates as JSON blobs under flat string keys,
//! the way the original browser app used local and session storage. The
//! module follows hexagonal architecture:
//!
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Fail-soft JSON layering in [`codec`]

pub mod adapters;
pub mod codec;
pub mod ports;

#[cfg(test)]
mod tests;
