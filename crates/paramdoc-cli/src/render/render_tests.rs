#![allow(non_snake_case)]

use super::*;
use paramdoc_core::Scalar;

fn tree() -> Vec<ParamNode> {
    let mut id = ParamNode::leaf(Some("id".into()), "long");
    id.required = true;
    id.description = "User id".into();
    let mut address = ParamNode::leaf(Some("address".into()), "Address");
    address.children = vec![ParamNode::leaf(Some("city".into()), "String")];
    vec![id, address]
}

#[test]
fn params___table___indents_children() {
    let out = params(&tree(), Format::Table).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("NAME"));
    assert!(lines[1].starts_with("id "));
    assert!(lines[1].contains("yes"));
    assert!(lines[1].ends_with("User id"));
    assert!(lines[3].starts_with("  city"));
}

#[test]
fn params___table___columns_align() {
    let out = params(&tree(), Format::Table).unwrap();

    let type_columns: Vec<usize> = out
        .lines()
        .skip(1)
        .map(|line| {
            ["long", "Address", "String"]
                .iter()
                .find_map(|label| line.find(label))
                .unwrap()
        })
        .collect();
    assert!(type_columns.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn params___table___unnamed_body_node() {
    let out = params(&[ParamNode::leaf(None, "String")], Format::Table).unwrap();

    assert!(out.lines().nth(1).unwrap().starts_with(BODY_LABEL));
}

#[test]
fn params___json___nested_nodes() {
    let out = params(&tree(), Format::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["name"], "id");
    assert_eq!(value[0]["required"], true);
    assert_eq!(value[1]["children"][0]["type_label"], "String");
}

#[test]
fn example___none_is_null() {
    assert_eq!(example(None).unwrap(), "null");
}

#[test]
fn example___keeps_key_order() {
    let mut members = members();
    members.reverse();
    let value = ExampleValue::Object(members.into_iter().collect());

    let out = example(Some(&value)).unwrap();

    assert!(out.find("\"zeta\"").unwrap() < out.find("\"alpha\"").unwrap());
}

fn members() -> Vec<(String, ExampleValue)> {
    vec![
        ("alpha".to_string(), Scalar::Int(1).into()),
        ("zeta".to_string(), Scalar::Str(String::new()).into()),
    ]
}
