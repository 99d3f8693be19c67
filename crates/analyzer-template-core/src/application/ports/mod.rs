//! Application ports (traits).
//!
//! ## Port Types
//!
//! - **Extension points**: implemented by templates, called by the host
//!   - `Package`: static facts about the package type, plus validation
//!   - `Template`: user variable declarations and parameter storage
//!
//! - **Driven (Output) Ports**: called by the session, implemented by hosts
//!   - `VarSource`: where user answers come from

pub mod extension;
pub mod output;

pub use extension::{Package, Template};
pub use output::VarSource;

#[cfg(test)]
pub use output::MockVarSource;
