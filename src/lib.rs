//! Corkboard: state core for a single-user kanban task board.
//!
//! This crate owns the business logic behind a drag-and-drop task board with
//! a demo login gate: task CRUD with a capped activity log, a derived
//! filtered/sorted view, and a session identity persisted across reloads.
//! Everything is synchronous and single-threaded; presentation, routing, and
//! gesture handling live outside the crate and reach in through the service
//! APIs.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, memory)
//!
//! # Modules
//!
//! - [`board`]: Board aggregate, derived views, and the board state manager
//! - [`session`]: Demo credential gate and session identity manager
//! - [`storage`]: Key-value blob storage port, adapters, and fail-soft codec

pub mod board;
pub mod session;
pub mod storage;
