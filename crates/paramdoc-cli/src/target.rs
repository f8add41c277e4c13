//! Resolving `--class` / `--type` arguments against a loaded graph

use anyhow::{Context, Result, bail};
use paramdoc_core::{ClassDef, DocSettings, GenericBinding, TypeGraph, TypeParser, TypeRef};

/// Parse a type expression in the scope of the graph's classes
pub fn parse_type(expr: &str, graph: &TypeGraph, settings: &DocSettings) -> Result<TypeRef> {
    let parser = TypeParser::new(settings)?
        .with_declared_classes(graph.classes().map(|class| class.name.as_str()));
    parser
        .parse(expr)
        .with_context(|| format!("Invalid type expression '{expr}'"))
}

/// The root class to document and the binding for its fields
///
/// `class` names a class directly; `ty` is a type expression such as
/// `Result<User>` whose arguments become the binding.
pub fn root_class<'g>(
    graph: &'g TypeGraph,
    settings: &DocSettings,
    class: Option<&str>,
    ty: Option<&str>,
) -> Result<(&'g ClassDef, GenericBinding)> {
    match (class, ty) {
        (Some(name), None) => {
            let class = graph
                .resolve(name)
                .with_context(|| format!("Class '{name}' not found in schema"))?;
            Ok((class, GenericBinding::empty()))
        }
        (None, Some(expr)) => match parse_type(expr, graph, settings)? {
            TypeRef::Class { name, args } => {
                let class = graph
                    .resolve(&name)
                    .with_context(|| format!("Class '{name}' not found in schema"))?;
                Ok((class, GenericBinding::from_args(&args)))
            }
            other => bail!("'{other}' is not a class type"),
        },
        _ => bail!("Specify exactly one of --class or --type"),
    }
}
