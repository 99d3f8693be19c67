//! End-to-end tests for the analyzer template.

use analyzer_template_adapters::{AnalyzerPackage, AnalyzerTemplate, MemoryVarSource};
use analyzer_template_core::prelude::*;

const MISSING: &str = "package requires a name";

fn answered(name: &str, value: &str) -> UserVar {
    UserVar::new(name, "test").with_value(value)
}

#[test]
fn test_both_params_supplied_validates() {
    let mut template = AnalyzerTemplate::new();
    template.apply_user_variables(&[answered("namespace", "mod"), answered("name", "proto")]);

    let expected: ParamBag = [("name", "proto"), ("namespace", "mod")].into_iter().collect();
    assert_eq!(template.params(), &expected);
    assert!(template.package().validate(&template).is_ok());
}

#[test]
fn test_empty_namespace_bypassing_assertion_fails_validation() {
    let mut template = AnalyzerTemplate::new();
    template.apply_user_variables(&[answered("name", "proto")]);
    template.define_param("namespace", "");

    let err = template.package().validate(&template).unwrap_err();
    assert_eq!(err.to_string(), MISSING);
    assert_eq!(err, DomainError::input(MISSING, "namespace"));
}

#[test]
fn test_no_vars_fails_validation() {
    let mut template = AnalyzerTemplate::new();
    template.apply_user_variables(&[]);

    assert!(template.params().is_empty());
    let err = template.package().validate(&template).unwrap_err();
    assert_eq!(err.to_string(), MISSING);
}

#[test]
fn test_missing_name_uses_same_message() {
    let mut template = AnalyzerTemplate::new();
    template.apply_user_variables(&[answered("namespace", "mod")]);

    let err = AnalyzerPackage::new().validate(&template).unwrap_err();
    assert_eq!(err, DomainError::input(MISSING, "name"));
}

#[test]
fn test_apply_twice_is_idempotent() {
    let mut template = AnalyzerTemplate::new();
    let vars = [answered("name", "foo")];

    template.apply_user_variables(&vars);
    let once = template.params().clone();
    template.apply_user_variables(&vars);

    assert_eq!(template.lookup_param("name"), Some("foo"));
    assert_eq!(template.params(), &once);
}

#[test]
fn test_package_is_fresh_and_fixed() {
    let template = AnalyzerTemplate::new();
    for _ in 0..2 {
        let package = template.package();
        assert_eq!(package.content_location(), "package");
        assert_eq!(package.needed_parameters(), ["name", "namespace"]);
    }
}

#[test]
fn test_template_speaks_current_api() {
    assert_eq!(AnalyzerTemplate::new().api_version(), TEMPLATE_API_VERSION);
}

// ============================================================================
// Session-driven tests
// ============================================================================

#[test]
fn test_session_scaffolds_with_answers() {
    let answers = MemoryVarSource::from_answers([("namespace", "mod"), ("name", "proto")]);

    let mut session = ScaffoldSession::new(Box::new(AnalyzerTemplate::new()));
    session.check_api_version(TEMPLATE_API_VERSION).unwrap();

    let declared: Vec<String> = session
        .declare()
        .unwrap()
        .iter()
        .map(|v| v.name().to_string())
        .collect();
    assert_eq!(declared, ["namespace", "name"]);

    session.apply(&answers).unwrap();
    let outcome = session.validate().unwrap();

    assert_eq!(outcome.content_dir, "package");
    assert_eq!(outcome.params.lookup("name"), Some("proto"));
    assert_eq!(outcome.params.lookup("namespace"), Some("mod"));
    assert_eq!(session.state(), SessionState::Validated);
}

#[test]
fn test_session_reports_missing_answer_as_input_error() {
    let answers = MemoryVarSource::from_answers([("name", "proto")]);

    let mut session = ScaffoldSession::new(Box::new(AnalyzerTemplate::new()));
    let err = session.run(&answers).unwrap_err();

    assert!(err.is_input_error());
    assert_eq!(err.to_string(), MISSING);
    assert_eq!(session.state(), SessionState::Applied);
}

#[test]
fn test_session_drops_empty_answers_instead_of_panicking() {
    let answers = MemoryVarSource::from_answers([("namespace", ""), ("name", "proto")]);

    let mut session = ScaffoldSession::new(Box::new(AnalyzerTemplate::new()));
    let err = session.run(&answers).unwrap_err();

    assert_eq!(
        err,
        TemplateError::Domain(DomainError::input(MISSING, "namespace"))
    );
    assert_eq!(session.template().lookup_param("namespace"), None);
}

#[test]
fn test_host_passing_empty_value_panics() {
    let result = std::panic::catch_unwind(|| {
        let mut template = AnalyzerTemplate::new();
        template.apply_user_variables(&[answered("namespace", "")]);
    });
    assert!(result.is_err());
}
