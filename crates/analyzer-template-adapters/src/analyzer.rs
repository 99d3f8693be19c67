//! Template for new analyzer packages.
//!
//! Asks for a namespace and a name and stores both as parameters for the
//! host's renderer.

use tracing::debug;

use analyzer_template_core::{
    application::ports::{Package, Template},
    domain::{DomainResult, ParamBag, UserVar},
};

/// Directory holding the package content inside the template.
const CONTENT_DIR: &str = "package";

/// Parameters every analyzer package needs.
const REQUIRED_PARAMS: [&str; 2] = ["name", "namespace"];

/// Message reported for any missing parameter. Hosts match on this text,
/// so it stays the same for both parameters; the error's `parameter`
/// field says which one.
const MISSING_PARAM_MESSAGE: &str = "package requires a name";

/// User variable name → parameter key.
static PARAM_FOR_VAR: [(&str, &str); 2] = [("name", "name"), ("namespace", "namespace")];

/// Package descriptor for analyzer packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzerPackage;

impl AnalyzerPackage {
    pub fn new() -> Self {
        Self
    }
}

impl Package for AnalyzerPackage {
    fn content_location(&self) -> &str {
        CONTENT_DIR
    }

    fn needed_parameters(&self) -> &[&str] {
        &REQUIRED_PARAMS
    }

    fn validate(&self, template: &dyn Template) -> DomainResult<()> {
        template
            .params()
            .require(REQUIRED_PARAMS, MISSING_PARAM_MESSAGE)
            .inspect_err(|err| debug!(?err, "Required parameter missing"))
    }
}

/// Template descriptor for analyzer packages.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerTemplate {
    params: ParamBag,
}

impl AnalyzerTemplate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Template for AnalyzerTemplate {
    fn declare_user_variables(&self) -> Vec<UserVar> {
        vec![
            UserVar::new("namespace", "module name of the analyzer"),
            UserVar::new("name", "name of the analyzer"),
        ]
    }

    fn apply_user_variables(&mut self, vars: &[UserVar]) {
        for var in vars {
            let mapping = PARAM_FOR_VAR.iter().find(|(name, _)| *name == var.name());
            let Some((_, key)) = mapping else {
                debug!(var = var.name(), "Ignoring unknown user variable");
                continue;
            };

            // The host never passes a consumed variable without a value.
            let value = var.value().unwrap_or_default();
            assert!(
                !value.is_empty(),
                "user variable '{}' applied without a value",
                var.name()
            );

            self.params.define(*key, value);
        }
    }

    fn package(&self) -> Box<dyn Package> {
        Box::new(AnalyzerPackage::new())
    }

    fn params(&self) -> &ParamBag {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParamBag {
        &mut self.params
    }
}
