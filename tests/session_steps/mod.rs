//! Step definitions for session login BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
