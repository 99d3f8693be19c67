//! Analyzer Template Core - the template extension contract.
//!
//! A package manager scaffolds new projects from templates it discovers at
//! runtime. This crate defines the contract between that host and a template:
//! which variables a template asks for, how their values become parameters,
//! and how the package validates the result.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Host package manager            │
//! │   (prompts, rendering, file copying)    │
//! └──────────────────┬──────────────────────┘
//!                    │ drives
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      ScaffoldSession (application)      │
//! │    declare → apply → validate           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Extension points (Package, Template)  │
//! │   Driven port (VarSource)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  analyzer-template-adapters             │
//! │  (AnalyzerTemplate, ConfigVarSource)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use analyzer_template_core::prelude::*;
//!
//! fn scaffold(template: Box<dyn Template>, answers: &dyn VarSource) -> ScaffoldResult<()> {
//!     let mut session = ScaffoldSession::new(template);
//!     let outcome = session.run(answers)?;
//!     println!("content lives in {}", outcome.content_dir);
//!     Ok(())
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what template authors and hosts should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOutcome, ScaffoldSession, SessionState,
        ports::{Package, Template, VarSource},
    };
    pub use crate::domain::{ApiVersion, DomainError, ParamBag, UserVar};
    pub use crate::error::{ScaffoldResult, TemplateError};
    pub use crate::TEMPLATE_API_VERSION;
}

/// Version of the template API this crate implements.
///
/// Hosts compare it against their own API version before driving a template.
pub const TEMPLATE_API_VERSION: &str = "1.0.0";

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
