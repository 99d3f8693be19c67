//! Tests for reading answers from configuration.

use std::collections::HashMap;

use analyzer_template_adapters::{AnalyzerTemplate, ConfigVarSource};
use analyzer_template_core::prelude::*;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_reads_user_vars_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[user_vars]
namespace = "mod"
name = "proto"
"#,
    );

    let source = ConfigVarSource::load_with_env(&path, Some(HashMap::new())).unwrap();
    assert_eq!(source.len(), 2);
    assert_eq!(
        source
            .value_for(&UserVar::new("name", "name of the analyzer"))
            .unwrap(),
        Some("proto".into())
    );
}

#[test]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[user_vars]\nname = \"from_file\"\n");

    let env = HashMap::from([(
        "ANALYZER_TEMPLATE_USER_VARS__NAME".to_string(),
        "from_env".to_string(),
    )]);
    let source = ConfigVarSource::load_with_env(&path, Some(env)).unwrap();

    assert_eq!(
        source.value_for(&UserVar::new("name", "d")).unwrap(),
        Some("from_env".into())
    );
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[user_vars\nname = ");

    let err = ConfigVarSource::load_with_env(&path, Some(HashMap::new())).unwrap_err();
    assert!(!err.is_input_error());
    assert_eq!(err.category(), analyzer_template_core::error::ErrorCategory::Configuration);
}

#[test]
fn test_config_answers_drive_a_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[user_vars]\nnamespace = \"mod\"\nname = \"proto\"\n");
    let source = ConfigVarSource::load_with_env(&path, Some(HashMap::new())).unwrap();

    let mut session = ScaffoldSession::new(Box::new(AnalyzerTemplate::new()));
    let outcome = session.run(&source).unwrap();

    let expected: ParamBag = [("name", "proto"), ("namespace", "mod")].into_iter().collect();
    assert_eq!(outcome.params, expected);
}
