//! User variables: values a template asks the end user for.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// An input variable requested from the end user.
///
/// Declared once by a template (name + description), then populated by the
/// host with whatever the user entered. The value is set at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVar {
    name: String,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl UserVar {
    /// Declare a variable with no default and no value.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: None,
            value: None,
        }
    }

    /// Offer a default the host may fall back to.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Populate the value, replacing any previous one.
    ///
    /// Intended for hosts and tests constructing already-answered variables.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The value supplied by the user, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    /// Drop any value, keeping the declaration.
    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// Set the user's answer.
    ///
    /// # Errors
    ///
    /// `UserVarAlreadyResolved` if a value was already set.
    pub fn resolve(&mut self, value: impl Into<String>) -> DomainResult<()> {
        if self.value.is_some() {
            return Err(DomainError::UserVarAlreadyResolved {
                name: self.name.clone(),
            });
        }
        self.value = Some(value.into());
        Ok(())
    }

    /// Check the name is an identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn validate_name(&self) -> DomainResult<()> {
        let mut chars = self.name.chars();
        let Some(first) = chars.next() else {
            return Err(DomainError::InvalidUserVarName {
                name: self.name.clone(),
                reason: "name cannot be empty".into(),
            });
        };

        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(DomainError::InvalidUserVarName {
                name: self.name.clone(),
                reason: "name must start with a letter or underscore".into(),
            });
        }

        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(DomainError::InvalidUserVarName {
                name: self.name.clone(),
                reason: format!("invalid character '{bad}'"),
            });
        }

        Ok(())
    }
}

impl fmt::Display for UserVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.description)
    }
}
