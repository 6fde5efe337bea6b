//! Port contracts for keyed blob persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the state
//! managers.

pub mod store;

pub use store::{BlobStore, StoreError, StoreResult};
