//! `response` command
//!
//! Documents a method return type: either the example body or, with
//! `--params`, the documentation rows.

use crate::render::{self, Format};
use crate::{schema, target};
use anyhow::Result;
use paramdoc_core::{DocContext, DocSettings};
use std::path::Path;

pub fn render(
    schema_path: &Path,
    settings: &DocSettings,
    ty: &str,
    params: Option<Format>,
) -> Result<String> {
    let graph = schema::load_graph(schema_path, settings)?;
    let return_type = target::parse_type(ty, &graph, settings)?;
    let ctx = DocContext::new(&graph, settings)?;

    match params {
        Some(format) => {
            let nodes = ctx.param_tree().build_response(&return_type)?;
            render::params(&nodes, format)
        }
        None => {
            let body = ctx.example_tree().build_response(&return_type)?;
            Ok(format!("{}\n", render::example(body.as_ref())?))
        }
    }
}

pub fn run(
    schema_path: &Path,
    settings: &DocSettings,
    ty: &str,
    params: Option<Format>,
) -> Result<()> {
    print!("{}", render(schema_path, settings, ty, params)?);
    Ok(())
}
