//! Traversal Benchmarks
//!
//! Measures schema loading and both tree builders over a synthetic graph.
//!
//! # Graph Shapes
//!
//! - **Wide**: one root class with many scalar fields
//! - **Deep**: a chain of classes, each holding a list of the next
//! - **Cyclic**: a ring of classes that truncates on re-entry

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use paramdoc_core::{
    ClassDef, ClassKind, DocContext, DocSettings, FieldDef, GenericBinding, PrimitiveKind,
    SchemaDocument, TypeGraph, TypeRef,
};
use std::hint::black_box;

fn wide_graph(fields: usize) -> TypeGraph {
    let mut root = ClassDef::new("Wide", ClassKind::Class);
    for i in 0..fields {
        let ty = if i % 2 == 0 {
            TypeRef::Primitive(PrimitiveKind::Long)
        } else {
            TypeRef::WellKnown("String".into())
        };
        root = root.with_field(FieldDef::new(format!("f{i}"), ty));
    }
    TypeGraph::new().with_class(root).expect("single class")
}

fn chain_graph(depth: usize, ring: bool) -> TypeGraph {
    let mut graph = TypeGraph::new();
    for i in 0..depth {
        let next = if i + 1 < depth {
            Some(format!("Level{}", i + 1))
        } else if ring {
            Some("Level0".to_string())
        } else {
            None
        };
        let mut class = ClassDef::new(format!("Level{i}"), ClassKind::Class)
            .with_field(FieldDef::new("id", TypeRef::Primitive(PrimitiveKind::Int)))
            .with_field(FieldDef::new("label", TypeRef::WellKnown("String".into())));
        if let Some(next) = next {
            class = class.with_field(FieldDef::new("children", TypeRef::list_of(TypeRef::class(next))));
        }
        graph.insert(class).expect("unique names");
    }
    graph
}

fn schema_json(classes: usize) -> Vec<u8> {
    let classes: Vec<serde_json::Value> = (0..classes)
        .map(|i| {
            serde_json::json!({
                "name": format!("com.acme.C{i}"),
                "fields": [
                    {"name": "id", "type": "long"},
                    {"name": "tags", "type": "List<String>"},
                    {"name": "next", "type": format!("C{}", i + 1)},
                    {"name": "attrs", "type": "Map<String, Integer>"}
                ]
            })
        })
        .collect();
    serde_json::to_vec(&serde_json::json!({ "classes": classes })).expect("valid json")
}

fn bench_builders(c: &mut Criterion) {
    let settings = DocSettings::default();
    let mut group = c.benchmark_group("builders");

    let shapes = [
        ("wide_200", wide_graph(200), "Wide"),
        ("deep_16", chain_graph(16, false), "Level0"),
        ("cyclic_8", chain_graph(8, true), "Level0"),
    ];

    for (label, graph, root) in &shapes {
        let ctx = DocContext::new(graph, &settings).expect("default settings");
        let root = graph.resolve(root).expect("root exists");

        group.bench_with_input(BenchmarkId::new("param_tree", label), root, |b, root| {
            b.iter(|| {
                ctx.param_tree()
                    .build_class(black_box(root), &GenericBinding::empty())
                    .expect("truncate policy")
            })
        });

        group.bench_with_input(BenchmarkId::new("example_tree", label), root, |b, root| {
            b.iter(|| {
                ctx.example_tree()
                    .build(black_box(root), &GenericBinding::empty())
                    .expect("truncate policy")
                    .to_json()
            })
        });
    }

    group.finish();
}

fn bench_schema_load(c: &mut Criterion) {
    let settings = DocSettings::default();
    let bytes = schema_json(100);

    c.bench_function("schema_load_100", |b| {
        b.iter(|| {
            let doc = SchemaDocument::from_json(black_box(&bytes)).expect("valid schema");
            TypeGraph::from_schema(&doc, &settings).expect("valid graph")
        })
    });
}

criterion_group!(benches, bench_builders, bench_schema_load);
criterion_main!(benches);
