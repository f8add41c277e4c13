//! `example` command

use crate::{render, schema, target};
use anyhow::Result;
use paramdoc_core::{DocContext, DocSettings};
use std::path::Path;

/// Example payload for a class or generic class type, as pretty JSON
pub fn render(
    schema_path: &Path,
    settings: &DocSettings,
    class: Option<&str>,
    ty: Option<&str>,
) -> Result<String> {
    let graph = schema::load_graph(schema_path, settings)?;
    let (class, binding) = target::root_class(&graph, settings, class, ty)?;
    let ctx = DocContext::new(&graph, settings)?;

    let value = ctx.example_tree().build(class, &binding)?;
    render::example(Some(&value))
}

pub fn run(
    schema_path: &Path,
    settings: &DocSettings,
    class: Option<&str>,
    ty: Option<&str>,
) -> Result<()> {
    println!("{}", render(schema_path, settings, class, ty)?);
    Ok(())
}
