#![allow(non_snake_case)]

use super::*;
use paramdoc_core::CyclePolicy;
use std::io::Write;

#[test]
fn from_str___empty_document___yields_defaults() {
    let settings = from_str("").unwrap();

    assert_eq!(settings, DocSettings::default());
}

#[test]
fn from_str___parses_all_sections() {
    let toml = r#"
exclude_field_names = ["serialVersionUID", "password"]
required_annotation = "jakarta.validation.constraints.NotNull"
cycle_policy = "fail"
max_depth = 8
log_level = "debug"

[extra_well_known]
Money = "0.00"
Flag = true
"#;

    let settings = from_str(toml).unwrap();

    assert!(settings.exclude_field_names.contains("password"));
    assert_eq!(settings.required_annotation, "jakarta.validation.constraints.NotNull");
    assert_eq!(settings.cycle_policy, CyclePolicy::Fail);
    assert_eq!(settings.max_depth, 8);
    assert_eq!(settings.extra_well_known.len(), 2);
    assert!(settings.catalog().unwrap().contains("Money"));
}

#[test]
fn from_str___rejects_invalid_values() {
    assert!(from_str("max_depth = 0").is_err());
    assert!(from_str("log_level = \"loud\"").is_err());
    assert!(from_str("cycle_policy = \"explode\"").is_err());
}

#[test]
fn from_file___missing_file___reports_path() {
    let err = from_file("/nonexistent/paramdoc.toml").unwrap_err();

    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn from_file___reads_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_depth = 4").unwrap();

    let settings = from_file(file.path()).unwrap();

    assert_eq!(settings.max_depth, 4);
}

#[test]
fn load___explicit_path_wins() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "required_tag = \"mandatory\"").unwrap();

    let settings = load(Some(file.path())).unwrap();

    assert_eq!(settings.required_tag, "mandatory");
}
