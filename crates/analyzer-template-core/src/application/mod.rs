//! Application layer for analyzer templates.
//!
//! This layer contains:
//! - **Ports**: the extension points a template implements (`Package`,
//!   `Template`) and the driven port hosts implement (`VarSource`)
//! - **Services**: `ScaffoldSession`, which drives one template through
//!   its lifecycle
//! - **Errors**: Application-specific error types
//!
//! Validation rules live in `crate::domain`; this layer only sequences them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldOutcome, ScaffoldSession, SessionState};

pub use ports::{Package, Template, VarSource};

pub use error::ApplicationError;
