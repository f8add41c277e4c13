#![allow(non_snake_case)]

use super::*;

#[test]
fn DocSettings___default___has_expected_values() {
    let settings = DocSettings::default();

    assert!(settings.exclude_field_names.contains("serialVersionUID"));
    assert_eq!(
        settings.required_annotation,
        "javax.validation.constraints.NotNull"
    );
    assert_eq!(settings.required_tag, "required");
    assert!(
        settings
            .injection_annotations
            .contains("org.springframework.beans.factory.annotation.Autowired")
    );
    assert!(settings.collection_types.contains("List"));
    assert!(settings.map_types.contains("HashMap"));
    assert_eq!(settings.cycle_policy, CyclePolicy::Truncate);
    assert_eq!(settings.max_depth, 32);
    assert_eq!(settings.log_level, "info");
}

#[test]
fn DocSettings___from_json___empty_bytes_returns_default() {
    let settings = DocSettings::from_json(b"").unwrap();

    assert_eq!(settings, DocSettings::default());
}

#[test]
fn DocSettings___from_json___partial_document_keeps_defaults() {
    let json = br#"{"exclude_field_names": ["password"], "cycle_policy": "fail"}"#;

    let settings = DocSettings::from_json(json).unwrap();

    assert!(settings.exclude_field_names.contains("password"));
    assert!(!settings.exclude_field_names.contains("serialVersionUID"));
    assert_eq!(settings.cycle_policy, CyclePolicy::Fail);
    assert_eq!(settings.required_tag, "required");
}

#[test]
fn DocSettings___from_json___invalid_json_returns_serialization_error() {
    let result = DocSettings::from_json(b"{not json");

    assert!(matches!(result, Err(DocError::SerializationError(_))));
}

#[test]
fn DocSettings___validate___rejects_empty_required_tag() {
    let settings = DocSettings {
        required_tag: "  ".into(),
        ..DocSettings::default()
    };

    assert!(matches!(settings.validate(), Err(DocError::ConfigError(_))));
}

#[test]
fn DocSettings___validate___rejects_zero_depth() {
    let settings = DocSettings::default().with_max_depth(0);

    assert!(matches!(settings.validate(), Err(DocError::ConfigError(_))));
}

#[test]
fn DocSettings___validate___rejects_unknown_log_level() {
    let settings = DocSettings {
        log_level: "verbose".into(),
        ..DocSettings::default()
    };

    assert!(matches!(settings.validate(), Err(DocError::ConfigError(_))));
}

#[test]
fn DocSettings___validate___rejects_non_scalar_well_known_value() {
    let mut settings = DocSettings::default();
    settings
        .extra_well_known
        .insert("Money".into(), serde_json::json!({"amount": 0}));

    assert!(matches!(settings.validate(), Err(DocError::ConfigError(_))));
    assert!(settings.catalog().is_err());
}

#[test]
fn DocSettings___catalog___includes_extra_entries() {
    let mut settings = DocSettings::default();
    settings
        .extra_well_known
        .insert("Money".into(), serde_json::json!("0.00"));

    let catalog = settings.catalog().unwrap();

    assert!(catalog.contains("Money"));
    assert!(catalog.contains("String"));
}

#[test]
fn DocSettings___builders___chain() {
    let settings = DocSettings::new()
        .exclude_field("secret")
        .with_cycle_policy(CyclePolicy::Fail)
        .with_max_depth(4);

    assert!(settings.exclude_field_names.contains("secret"));
    assert_eq!(settings.cycle_policy, CyclePolicy::Fail);
    assert_eq!(settings.max_depth, 4);
}
