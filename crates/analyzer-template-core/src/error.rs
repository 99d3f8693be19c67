//! Unified error handling for analyzer templates.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for template operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Input and declaration errors from the domain layer.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from driving the session.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl TemplateError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Input => ErrorCategory::Input,
                crate::domain::ErrorCategory::Declaration => ErrorCategory::Declaration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Whether the end user can fix this by supplying different input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Domain(DomainError::Input { .. }))
    }
}

/// Error categories for host display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Declaration,
    Compatibility,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, TemplateError>;
