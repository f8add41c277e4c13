#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn DocError___cyclic_type___displays_path() {
    let err = DocError::CyclicType {
        path: vec!["Node".into(), "Edge".into(), "Node".into()],
    };

    let display = err.to_string();

    assert_eq!(display, "cyclic type detected: Node -> Edge -> Node");
}

#[test]
fn DocError___type_syntax___displays_input_and_reason() {
    let err = DocError::type_syntax("List<", "unclosed '<'");

    assert_eq!(
        err.to_string(),
        "invalid type expression 'List<': unclosed '<'"
    );
}

#[test]
fn DocError___from_serde_json___becomes_serialization_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

    let err: DocError = json_err.into();

    assert!(matches!(err, DocError::SerializationError(_)));
}

#[test_case(DocError::type_syntax("", ""), 1)]
#[test_case(DocError::DuplicateClass("A".into()), 2)]
#[test_case(DocError::InvalidSchema("x".into()), 3)]
#[test_case(DocError::CyclicType { path: vec![] }, 4)]
#[test_case(DocError::DepthExceeded { max_depth: 1, class: "A".into() }, 5)]
#[test_case(DocError::ConfigError("x".into()), 6)]
#[test_case(DocError::SerializationError("x".into()), 7)]
fn DocError___error_code___is_stable(err: DocError, expected: u32) {
    assert_eq!(err.error_code(), expected);
}
