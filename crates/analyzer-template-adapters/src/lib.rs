//! Infrastructure adapters for analyzer templates.
//!
//! This crate implements the ports defined in
//! `analyzer-template-core::application::ports`: the analyzer template
//! itself, the value sources a host can answer user variables from, and
//! the tracing setup for hosts that embed the template.

pub mod analyzer;
pub mod logging;
pub mod var_source;

// Re-export commonly used adapters
pub use analyzer::{AnalyzerPackage, AnalyzerTemplate};
pub use var_source::{ConfigVarSource, MemoryVarSource};
