//! Domain model for the session context.

mod credentials;
mod identity;
mod outcome;

pub use credentials::DemoCredentials;
pub use identity::Identity;
pub use outcome::LoginOutcome;
