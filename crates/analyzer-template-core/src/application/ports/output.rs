//! Driven (output) ports - implemented by hosts.
//!
//! The `analyzer-template-adapters` crate provides implementations.

use crate::domain::UserVar;
use crate::error::ScaffoldResult;

/// Port for collecting user answers.
///
/// Implemented by:
/// - `analyzer_template_adapters::MemoryVarSource` (answers known up front)
/// - `analyzer_template_adapters::ConfigVarSource` (config file + environment)
///
/// Returning `Ok(None)` means "no answer"; the session then falls back to
/// the variable's declared default.
#[cfg_attr(test, mockall::automock)]
pub trait VarSource: Send + Sync {
    fn value_for(&self, var: &UserVar) -> ScaffoldResult<Option<String>>;
}
