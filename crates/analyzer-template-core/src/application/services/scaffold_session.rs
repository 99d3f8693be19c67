//! Scaffold Session - drives one template through its lifecycle.
//!
//! 1. Declare the user variables the template needs
//! 2. Resolve their values and apply them to the template
//! 3. Let the template's package validate the resulting parameters
//!
//! Rendering and copying files stay with the host; the session hands back
//! a [`ScaffoldOutcome`] for it to consume.

use std::fmt;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Template, VarSource},
    },
    domain::{ApiVersion, DomainValidator as validator, ParamBag, UserVar},
    error::ScaffoldResult,
};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Created,
    Declared,
    Applied,
    Validated,
}

impl SessionState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Declared => "declared",
            Self::Applied => "applied",
            Self::Validated => "validated",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the host needs to render a validated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub session_id: Uuid,
    pub content_dir: String,
    pub params: ParamBag,
}

/// A single scaffolding operation over one template instance.
pub struct ScaffoldSession {
    id: Uuid,
    template: Box<dyn Template>,
    state: SessionState,
    declared: Vec<UserVar>,
}

impl ScaffoldSession {
    pub fn new(template: Box<dyn Template>) -> Self {
        Self {
            id: Uuid::new_v4(),
            template,
            state: SessionState::Created,
            declared: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn template(&self) -> &dyn Template {
        self.template.as_ref()
    }

    /// Refuse templates written against an API the host does not speak.
    pub fn check_api_version(&self, host: &str) -> ScaffoldResult<()> {
        let host_version = ApiVersion::parse(host)?;
        let template_version = ApiVersion::parse(self.template.api_version())?;

        if !template_version.is_compatible_with(&host_version) {
            return Err(ApplicationError::IncompatibleApiVersion {
                template: template_version.to_string(),
                host: host_version.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Ask the template for its variables.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn declare(&mut self) -> ScaffoldResult<&[UserVar]> {
        self.expect_state("declare", SessionState::Created)?;

        let vars = self.template.declare_user_variables();
        validator::validate_user_vars(&vars)?;

        debug!(count = vars.len(), "User variables declared");
        self.declared = vars;
        self.state = SessionState::Declared;
        Ok(&self.declared)
    }

    /// Resolve every declared variable from `source` and apply the answers.
    ///
    /// Variables with no usable answer are left out rather than passed
    /// empty, so that package validation reports them as input errors.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn apply(&mut self, source: &dyn VarSource) -> ScaffoldResult<&ParamBag> {
        self.expect_state("apply", SessionState::Declared)?;

        let mut resolved = Vec::with_capacity(self.declared.len());
        for var in &self.declared {
            let answer = source
                .value_for(var)?
                .filter(|v| !v.is_empty())
                .or_else(|| {
                    var.default_value()
                        .filter(|d| !d.is_empty())
                        .map(str::to_string)
                });

            match answer {
                Some(value) => {
                    let mut var = var.clone();
                    var.clear_value();
                    var.resolve(value)?;
                    resolved.push(var);
                }
                None => warn!(var = var.name(), "No value supplied, leaving unset"),
            }
        }

        self.template.apply_user_variables(&resolved);
        self.state = SessionState::Applied;

        debug!(params = self.template.params().len(), "User variables applied");
        Ok(self.template.params())
    }

    /// Validate the applied parameters against the template's package.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn validate(&mut self) -> ScaffoldResult<ScaffoldOutcome> {
        self.expect_state("validate", SessionState::Applied)?;

        let package = self.template.package();
        package.validate(self.template.as_ref())?;

        self.state = SessionState::Validated;
        info!(content_dir = package.content_location(), "Template validated");

        Ok(ScaffoldOutcome {
            session_id: self.id,
            content_dir: package.content_location().to_string(),
            params: self.template.params().clone(),
        })
    }

    /// Run all three steps.
    pub fn run(&mut self, source: &dyn VarSource) -> ScaffoldResult<ScaffoldOutcome> {
        self.declare()?;
        self.apply(source)?;
        self.validate()
    }

    fn expect_state(&self, step: &'static str, expected: SessionState) -> ScaffoldResult<()> {
        if self.state != expected {
            return Err(ApplicationError::InvalidState {
                step,
                expected,
                actual: self.state,
            }
            .into());
        }
        Ok(())
    }
}
