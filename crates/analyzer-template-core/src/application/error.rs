//! Application layer errors.
//!
//! These errors represent failures in driving a template, not input
//! validation. Input errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::application::services::SessionState;
use crate::error::ErrorCategory;

/// Errors that occur while driving a scaffolding session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A lifecycle step was called out of order.
    #[error("Cannot {step} a session in state '{actual}' (expected '{expected}')")]
    InvalidState {
        step: &'static str,
        expected: SessionState,
        actual: SessionState,
    },

    /// The template targets an API the host does not speak.
    #[error("Template API {template} is incompatible with host API {host}")]
    IncompatibleApiVersion { template: String, host: String },

    /// The value source could not answer.
    #[error("Failed to read user variable values: {reason}")]
    VarSource { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidState { .. } => vec![
                "Steps must run in order: declare, apply, validate".into(),
                "This is likely a bug in the host".into(),
            ],
            Self::IncompatibleApiVersion { template, host } => vec![
                format!("The template needs API {}, the host provides {}", template, host),
                "Upgrade the package manager or use an older template release".into(),
            ],
            Self::VarSource { reason } => vec![
                format!("Could not read answers: {}", reason),
                "Check the [user_vars] table of your configuration file".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidState { .. } => ErrorCategory::Internal,
            Self::IncompatibleApiVersion { .. } => ErrorCategory::Compatibility,
            Self::VarSource { .. } => ErrorCategory::Configuration,
        }
    }
}
