//! Extension points a template implements.
//!
//! The host only ever sees `dyn Package` and `dyn Template`; it never
//! depends on a concrete template type.

use crate::TEMPLATE_API_VERSION;
use crate::domain::{DomainResult, ParamBag, UserVar};

/// Package-level facts and validation.
///
/// A package descriptor holds no state of its own. It reads whatever it
/// needs from the template passed to [`Package::validate`].
pub trait Package: Send + Sync {
    /// Relative location of the package content inside the template.
    fn content_location(&self) -> &str;

    /// Parameters that must be present for this package type, in order.
    fn needed_parameters(&self) -> &[&str];

    /// Check that `template` was filled in correctly.
    ///
    /// # Errors
    ///
    /// `DomainError::Input` when a required parameter is missing or empty.
    /// The host reports it to the end user and aborts scaffolding.
    fn validate(&self, template: &dyn Template) -> DomainResult<()>;
}

/// A template: declares user variables and turns their values into
/// parameters.
pub trait Template: Send + Sync {
    /// The variables the host should ask the user for, in prompt order.
    ///
    /// Declarations carry no values.
    fn declare_user_variables(&self) -> Vec<UserVar>;

    /// Store the values of user-populated variables as parameters.
    ///
    /// # Panics
    ///
    /// Implementations may panic when the host passes a variable they
    /// consume without a non-empty value. That is a host bug, not an input
    /// error.
    fn apply_user_variables(&mut self, vars: &[UserVar]);

    /// A fresh descriptor for the package this template belongs to.
    fn package(&self) -> Box<dyn Package>;

    fn params(&self) -> &ParamBag;

    fn params_mut(&mut self) -> &mut ParamBag;

    fn lookup_param(&self, key: &str) -> Option<&str> {
        self.params().lookup(key)
    }

    fn define_param(&mut self, key: &str, value: &str) {
        self.params_mut().define(key, value);
    }

    /// Template API version this template was written against.
    fn api_version(&self) -> &str {
        TEMPLATE_API_VERSION
    }
}
