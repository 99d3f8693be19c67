//! Core domain layer for analyzer templates.
//!
//! This module contains pure logic with no I/O. Everything the host does
//! (prompting, rendering, copying files) happens behind the traits in
//! `crate::application::ports`.
//!
//! - **No I/O**: values arrive already collected
//! - **Immutable declarations**: a `UserVar` gets its value at most once
//! - **Plain values**: all domain objects are Clone + PartialEq

pub mod api_version;
pub mod error;
pub mod params;
pub mod uservar;

mod validation;

pub use api_version::ApiVersion;
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use params::ParamBag;
pub use uservar::UserVar;
pub use validation::DomainValidator;
