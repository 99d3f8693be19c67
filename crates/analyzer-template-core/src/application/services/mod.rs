//! Application services - orchestrate use cases.

pub mod scaffold_session;

pub use scaffold_session::{ScaffoldOutcome, ScaffoldSession, SessionState};
