//! Shared class graph for unit tests

use crate::graph::TypeGraph;
use crate::model::{ClassDef, ClassKind, DocComment, FieldDef, PrimitiveKind, TypeRef};

pub(crate) const NOT_NULL: &str = "javax.validation.constraints.NotNull";
pub(crate) const AUTOWIRED: &str = "org.springframework.beans.factory.annotation.Autowired";

pub(crate) fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveKind::Int)
}

pub(crate) fn long() -> TypeRef {
    TypeRef::Primitive(PrimitiveKind::Long)
}

pub(crate) fn string() -> TypeRef {
    TypeRef::WellKnown("String".into())
}

pub(crate) fn placeholder(name: &str) -> TypeRef {
    TypeRef::Placeholder(name.into())
}

pub(crate) fn graph() -> TypeGraph {
    let classes = vec![
        ClassDef::new("Foo", ClassKind::Class)
            .with_field(FieldDef::new("a", int()))
            .with_field(FieldDef::new("b", string())),
        ClassDef::new("Bar", ClassKind::Class)
            .with_field(FieldDef::new("flag", TypeRef::Primitive(PrimitiveKind::Boolean))),
        ClassDef::new("Address", ClassKind::Class)
            .with_field(FieldDef::new("city", string()))
            .with_field(FieldDef::new("zip", string())),
        ClassDef::new("Item", ClassKind::Class)
            .with_field(FieldDef::new("sku", string()))
            .with_field(FieldDef::new("qty", int())),
        ClassDef::new("Order", ClassKind::Class)
            .with_field(FieldDef::new("orderId", long()))
            .with_field(FieldDef::new("items", TypeRef::list_of(TypeRef::class("Item")))),
        ClassDef::new("Status", ClassKind::Enum),
        ClassDef::new("UserService", ClassKind::Interface),
        ClassDef::new("BaseEntity", ClassKind::Class)
            .with_field(FieldDef::new("createdAt", TypeRef::WellKnown("Date".into()))),
        ClassDef::new("User", ClassKind::Class)
            .extends("BaseEntity")
            .with_field(FieldDef::new("serialVersionUID", long()).as_static())
            .with_field(
                FieldDef::new("id", long())
                    .with_annotation(NOT_NULL)
                    .with_doc(DocComment::new("User id")),
            )
            .with_field(
                FieldDef::new("name", string())
                    .with_doc(DocComment::new("Display name").with_tag("required", "")),
            )
            .with_field(FieldDef::new("password", string()))
            .with_field(FieldDef::new("address", TypeRef::class("Address")))
            .with_field(FieldDef::new("tags", TypeRef::list_of(string())))
            .with_field(FieldDef::new("orders", TypeRef::list_of(TypeRef::class("Order"))))
            .with_field(FieldDef::new("scores", TypeRef::array_of(int())))
            .with_field(FieldDef::new("homes", TypeRef::array_of(TypeRef::class("Address"))))
            .with_field(FieldDef::new("attrs", TypeRef::map_of(string(), TypeRef::class("Address"))))
            .with_field(FieldDef::new("labels", TypeRef::map_of(string(), string())))
            .with_field(FieldDef::new("status", TypeRef::class("Status")))
            .with_field(FieldDef::new("service", TypeRef::class("UserService")).with_annotation(AUTOWIRED))
            .with_field(FieldDef::new("helper", TypeRef::class("UserService")))
            .with_field(FieldDef::new("legacy", TypeRef::class("Missing"))),
        ClassDef::new("Result", ClassKind::Class)
            .with_type_params(&["T", "K"])
            .with_field(FieldDef::new("code", int()))
            .with_field(FieldDef::new("data", placeholder("T")))
            .with_field(FieldDef::new("extra", placeholder("K")))
            .with_field(FieldDef::new("other", placeholder("X"))),
        ClassDef::new("Page", ClassKind::Class)
            .with_type_params(&["T"])
            .with_field(FieldDef::new("total", long()))
            .with_field(FieldDef::new("first", placeholder("T"))),
        ClassDef::new("Node", ClassKind::Class)
            .with_field(FieldDef::new("value", int()))
            .with_field(FieldDef::new("next", TypeRef::class("Node")))
            .with_field(FieldDef::new("children", TypeRef::list_of(TypeRef::class("Node")))),
        ClassDef::new("Edge", ClassKind::Class)
            .with_field(FieldDef::new("target", TypeRef::class("Vertex"))),
        ClassDef::new("Vertex", ClassKind::Class)
            .with_field(FieldDef::new("edges", TypeRef::list_of(TypeRef::class("Edge")))),
        ClassDef::new("Pair", ClassKind::Class)
            .with_field(FieldDef::new("left", TypeRef::class("Address")))
            .with_field(FieldDef::new("right", TypeRef::class("Address"))),
    ];

    let mut graph = TypeGraph::new();
    for class in classes {
        graph.insert(class).unwrap();
    }
    graph
}
