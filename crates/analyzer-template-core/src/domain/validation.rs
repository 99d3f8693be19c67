use std::collections::HashSet;

use crate::domain::{error::DomainError, uservar::UserVar};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Check a template's variable declarations.
    ///
    /// Every name must be a valid identifier, unique within the sequence,
    /// and carry a description the host can show in its prompt. Values are
    /// the user's to supply, so a declaration must not carry one.
    pub fn validate_user_vars(vars: &[UserVar]) -> Result<(), DomainError> {
        let mut seen = HashSet::new();

        for var in vars {
            var.validate_name()?;

            if var.description().trim().is_empty() {
                return Err(DomainError::MissingDescription {
                    name: var.name().to_string(),
                });
            }

            if var.is_resolved() {
                return Err(DomainError::PresetUserVarValue {
                    name: var.name().to_string(),
                });
            }

            if !seen.insert(var.name()) {
                return Err(DomainError::DuplicateUserVar {
                    name: var.name().to_string(),
                });
            }
        }

        Ok(())
    }
}
