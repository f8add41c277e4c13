//! Property-based tests for tree traversal
//!
//! Random class graphs (including cyclic ones) are documented with both
//! builders; the two trees must expose the same field names at every level,
//! excluded and static fields must never appear, and output must be stable.

use paramdoc_core::{
    ClassDef, ClassKind, DocContext, DocSettings, ExampleValue, FieldDef, GenericBinding,
    ParamNode, PrimitiveKind, TypeGraph, TypeRef,
};
use proptest::prelude::*;

const FIELD_NAMES: [&str; 8] = ["id", "name", "secret", "items", "owner", "note", "count", "ref"];
const EXCLUDED: &str = "secret";

#[derive(Debug, Clone)]
struct FieldShape {
    name: usize,
    kind: u8,
    target: usize,
    is_static: bool,
}

fn arb_field() -> impl Strategy<Value = FieldShape> {
    (0..FIELD_NAMES.len(), 0u8..6, 0usize..5, prop::bool::weighted(0.15)).prop_map(
        |(name, kind, target, is_static)| FieldShape {
            name,
            kind,
            target,
            is_static,
        },
    )
}

// Strategy: up to five classes of up to four fields each
fn arb_graph() -> impl Strategy<Value = Vec<Vec<FieldShape>>> {
    prop::collection::vec(prop::collection::vec(arb_field(), 0..4), 1..5)
}

fn class_name(index: usize) -> String {
    format!("C{index}")
}

fn build_graph(shapes: &[Vec<FieldShape>]) -> TypeGraph {
    let mut graph = TypeGraph::new();
    for (index, fields) in shapes.iter().enumerate() {
        let mut class = ClassDef::new(class_name(index), ClassKind::Class);
        let mut seen = Vec::new();
        for shape in fields {
            if seen.contains(&shape.name) {
                continue;
            }
            seen.push(shape.name);

            // Maps and injected fields are left out: only the param tree expands them
            let target = TypeRef::class(class_name(shape.target % shapes.len()));
            let ty = match shape.kind {
                0 => TypeRef::Primitive(PrimitiveKind::Int),
                1 => TypeRef::WellKnown("String".into()),
                2 => target,
                3 => TypeRef::list_of(target),
                4 => TypeRef::array_of(target),
                _ => TypeRef::class("Unknown"),
            };
            let mut field = FieldDef::new(FIELD_NAMES[shape.name], ty);
            if shape.is_static {
                field = field.as_static();
            }
            class = class.with_field(field);
        }
        graph.insert(class).expect("class names are unique");
    }
    graph
}

fn param_names(nodes: &[ParamNode], out: &mut Vec<String>) {
    for node in nodes {
        out.extend(node.name.clone());
        param_names(&node.children, out);
    }
}

fn example_names(value: &ExampleValue, out: &mut Vec<String>) {
    match value {
        ExampleValue::Object(members) => {
            for (name, member) in members {
                out.push(name.clone());
                example_names(member, out);
            }
        }
        ExampleValue::Array(items) => items.iter().for_each(|item| example_names(item, out)),
        ExampleValue::Scalar(_) => {}
    }
}

proptest! {
    /// Property: both trees list the same field names in the same order
    #[test]
    fn proptest_trees_agree_on_field_names(shapes in arb_graph()) {
        let graph = build_graph(&shapes);
        let settings = DocSettings::default().exclude_field(EXCLUDED);
        let ctx = DocContext::new(&graph, &settings).expect("default settings are valid");

        for class in graph.classes() {
            let params = ctx.param_tree().build_class(class, &GenericBinding::empty())
                .expect("truncate policy never fails");
            let example = ctx.example_tree().build(class, &GenericBinding::empty())
                .expect("truncate policy never fails");

            let mut from_params = Vec::new();
            param_names(&params, &mut from_params);
            let mut from_example = Vec::new();
            example_names(&example, &mut from_example);

            prop_assert_eq!(from_params, from_example);
        }
    }

    /// Property: excluded and static fields never appear at any depth
    #[test]
    fn proptest_excluded_and_static_fields_never_appear(shapes in arb_graph()) {
        let graph = build_graph(&shapes);
        let settings = DocSettings::default().exclude_field(EXCLUDED);
        let ctx = DocContext::new(&graph, &settings).expect("default settings are valid");

        for class in graph.classes() {
            let params = ctx.param_tree().build_class(class, &GenericBinding::empty())
                .expect("truncate policy never fails");
            let mut names = Vec::new();
            param_names(&params, &mut names);

            prop_assert!(!names.iter().any(|n| n == EXCLUDED));

            let own_static: Vec<&str> = class.fields.iter()
                .filter(|f| f.is_static)
                .map(|f| f.name.as_str())
                .collect();
            for node in &params {
                prop_assert!(!own_static.contains(&node.name.as_deref().unwrap_or_default()));
            }
        }
    }

    /// Property: building twice yields identical output
    #[test]
    fn proptest_output_is_deterministic(shapes in arb_graph()) {
        let graph = build_graph(&shapes);
        let settings = DocSettings::default();
        let ctx = DocContext::new(&graph, &settings).expect("default settings are valid");
        let root = graph.resolve("C0").expect("C0 always exists");

        let first = ctx.example_tree().build(root, &GenericBinding::empty())
            .expect("truncate policy never fails");
        let second = ctx.example_tree().build(root, &GenericBinding::empty())
            .expect("truncate policy never fails");

        prop_assert_eq!(first.to_json().to_string(), second.to_json().to_string());
    }
}
