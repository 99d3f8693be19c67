// ============================================================================
// domain/error.rs - TEMPLATE DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (hosts may keep them for reporting)
/// - Categorizable (for host display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors (reported to the end user)
    // ========================================================================
    /// A required parameter was missing or empty.
    ///
    /// `message` is the host-visible text; `parameter` names the offending
    /// key so hosts can be more precise without changing that text.
    #[error("{message}")]
    Input {
        message: String,
        parameter: String,
    },

    // ========================================================================
    // Declaration Errors (template authoring mistakes)
    // ========================================================================
    #[error("Invalid user variable name '{name}': {reason}")]
    InvalidUserVarName { name: String, reason: String },

    #[error("User variable '{name}' is declared more than once")]
    DuplicateUserVar { name: String },

    #[error("User variable '{name}' has no description")]
    MissingDescription { name: String },

    #[error("User variable '{name}' is declared with a value")]
    PresetUserVarValue { name: String },

    // ========================================================================
    // Lifecycle Violations
    // ========================================================================
    #[error("User variable '{name}' already has a value")]
    UserVarAlreadyResolved { name: String },

    #[error("Invalid API version '{version}': {reason}")]
    InvalidApiVersion { version: String, reason: String },
}

impl DomainError {
    /// Build an input error for a missing parameter.
    pub fn input(message: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            parameter: parameter.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Input { parameter, .. } => vec![
                format!("Provide a non-empty value for '{}'", parameter),
                "Values can come from the prompt, the [user_vars] config table, or the environment"
                    .into(),
            ],
            Self::InvalidUserVarName { .. }
            | Self::DuplicateUserVar { .. }
            | Self::MissingDescription { .. }
            | Self::PresetUserVarValue { .. } => vec![
                "The template declares its variables incorrectly".into(),
                "Please report this issue to the template author".into(),
            ],
            Self::InvalidApiVersion { version, .. } => vec![
                format!("'{}' is not a MAJOR.MINOR.PATCH version", version),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for host display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Input { .. } => ErrorCategory::Input,
            Self::InvalidUserVarName { .. }
            | Self::DuplicateUserVar { .. }
            | Self::MissingDescription { .. }
            | Self::PresetUserVarValue { .. }
            | Self::InvalidApiVersion { .. } => ErrorCategory::Declaration,
            Self::UserVarAlreadyResolved { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Declaration,
    Internal,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
