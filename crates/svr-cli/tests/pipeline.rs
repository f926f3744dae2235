use std::fs;
use std::path::Path;

use svr_cli::pipeline::{
    EXIT_ERROR, EXIT_REJECTED, OutputConfig, convert, default_output_path, load_validator,
};
use svr_model::Issue;
use svr_normalize::NormalizeError;
use svr_output::OutputFormat;

const ACCEPTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<dataset>
  <observation>
    <criterion>healthy</criterion>
    <predictor><label>age</label><value>34</value></predictor>
    <predictor><label>weight</label><value>71.5</value></predictor>
  </observation>
  <observation>
    <criterion>sick</criterion>
    <predictor><label>age</label><value>61</value></predictor>
    <predictor><label>weight</label><value>88.0</value></predictor>
  </observation>
</dataset>
"#;

fn write_document(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn default_output_path_sits_next_to_document() {
    assert_eq!(
        default_output_path(Path::new("data/run1.xml"), OutputFormat::Csv),
        Path::new("data/run1.normalized.csv")
    );
    assert_eq!(
        default_output_path(Path::new("run1.json"), OutputFormat::Json),
        Path::new("run1.normalized.json")
    );
}

#[test]
fn accepted_document_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let document = write_document(dir.path(), "run.xml", ACCEPTED);
    let output = OutputConfig {
        path: dir.path().join("run.csv"),
        format: OutputFormat::Csv,
    };

    let outcome = convert(&document, &load_validator(None).unwrap(), Some(&output)).unwrap();

    assert!(!outcome.is_rejected());
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(outcome.observations, 2);
    assert_eq!(outcome.output.as_deref(), Some(output.path.as_path()));
    insta::assert_snapshot!(fs::read_to_string(&output.path).unwrap(), @r"
    dependent_label,independent_label,independent_value
    healthy,age,34
    healthy,weight,71.5
    sick,age,61
    sick,weight,88.0
    ");
}

#[test]
fn rules_file_can_reject_a_document() {
    let dir = tempfile::tempdir().unwrap();
    let document = write_document(dir.path(), "run.xml", ACCEPTED);
    let rules = write_document(
        dir.path(),
        "rules.json",
        r#"{"features": {"age": {"kind": "integer", "min": 0, "max": 50}}}"#,
    );
    let output = OutputConfig {
        path: dir.path().join("run.csv"),
        format: OutputFormat::Csv,
    };

    let validator = load_validator(Some(&rules)).unwrap();
    let outcome = convert(&document, &validator, Some(&output)).unwrap();

    assert!(outcome.is_rejected());
    assert_eq!(outcome.exit_code(), EXIT_REJECTED);
    assert!(outcome.output.is_none());
    assert!(!output.path.exists());
    let Err(NormalizeError::Validation(rejection)) = &outcome.result else {
        panic!("expected a validation rejection, got {:?}", outcome.result);
    };
    assert_eq!(rejection.location.observation, 1);
    assert_eq!(rejection.location.feature, "age");
    assert!(matches!(
        rejection.issues.as_slice(),
        [Issue::AboveMaximum { value, .. }] if value == "61"
    ));
}

#[test]
fn invalid_rules_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let rules = write_document(
        dir.path(),
        "rules.json",
        r#"{"default": {"min": 5, "max": 1}}"#,
    );
    let error = load_validator(Some(&rules)).unwrap_err();
    assert!(format!("{error:#}").contains("rules.json"));
}

#[test]
fn unreadable_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = convert(
        &dir.path().join("missing.xml"),
        &load_validator(None).unwrap(),
        None,
    );
    assert!(result.is_err());
}

#[test]
fn operational_failures_use_a_distinct_exit_code() {
    assert_ne!(EXIT_ERROR, EXIT_REJECTED);
    assert_ne!(EXIT_ERROR, 0);
}
