//! Step definitions for board lifecycle BDD scenarios.

pub mod world;

mod given;
mod then;
