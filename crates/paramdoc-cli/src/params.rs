//! `params` command

use crate::render::{self, Format};
use crate::{schema, target};
use anyhow::Result;
use paramdoc_core::{DocContext, DocSettings};
use std::path::Path;

/// Documentation tree for a class or generic class type, rendered
pub fn render(
    schema_path: &Path,
    settings: &DocSettings,
    class: Option<&str>,
    ty: Option<&str>,
    format: Format,
) -> Result<String> {
    let graph = schema::load_graph(schema_path, settings)?;
    let (class, binding) = target::root_class(&graph, settings, class, ty)?;
    let ctx = DocContext::new(&graph, settings)?;

    let nodes = ctx.param_tree().build_class(class, &binding)?;
    render::params(&nodes, format)
}

pub fn run(
    schema_path: &Path,
    settings: &DocSettings,
    class: Option<&str>,
    ty: Option<&str>,
    format: Format,
) -> Result<()> {
    print!("{}", render(schema_path, settings, class, ty, format)?);
    Ok(())
}
