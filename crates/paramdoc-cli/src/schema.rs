//! Schema file loading and the `check` command

use anyhow::{Context, Result};
use paramdoc_core::{DocSettings, SchemaDocument, TypeGraph};
use std::path::Path;

/// Load a schema document; `.toml` files are read as TOML, everything else as JSON
pub fn load_document(path: impl AsRef<Path>) -> Result<SchemaDocument> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema: {path:?}"))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&content).with_context(|| format!("Failed to parse TOML schema: {path:?}"))
    } else {
        SchemaDocument::from_json(content.as_bytes())
            .with_context(|| format!("Failed to parse JSON schema: {path:?}"))
    }
}

/// Load and materialize a schema into a graph
pub fn load_graph(path: impl AsRef<Path>, settings: &DocSettings) -> Result<TypeGraph> {
    let doc = load_document(path.as_ref())?;
    let graph = TypeGraph::from_schema(&doc, settings)
        .with_context(|| format!("Invalid schema: {:?}", path.as_ref()))?;
    tracing::debug!(classes = graph.len(), "schema loaded");
    Ok(graph)
}

/// Summary printed by `check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    pub classes: usize,
    pub fields: usize,
    pub unresolved: Vec<String>,
}

impl SchemaReport {
    pub fn of(graph: &TypeGraph) -> Self {
        Self {
            classes: graph.len(),
            fields: graph.classes().map(|class| class.fields.len()).sum(),
            unresolved: graph.unresolved_references(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "✓ Classes: {}\n✓ Fields: {}\n",
            self.classes, self.fields
        );
        if self.unresolved.is_empty() {
            out.push_str("✓ All class references resolve\n");
        } else {
            out.push_str(&format!(
                "! Unresolved references ({}): {}\n",
                self.unresolved.len(),
                self.unresolved.join(", ")
            ));
        }
        out
    }
}

/// Check command implementation
///
/// Unresolved references are reported as warnings; with `strict` they fail the
/// check.
pub fn check(schema_path: &Path, settings: &DocSettings, strict: bool) -> Result<()> {
    println!("Checking schema: {}", schema_path.display());

    let graph = load_graph(schema_path, settings)?;
    let report = SchemaReport::of(&graph);
    for name in &report.unresolved {
        tracing::warn!(class = %name, "unresolved class reference");
    }

    print!("{}", report.render());

    if strict && !report.unresolved.is_empty() {
        anyhow::bail!(
            "{} unresolved class reference(s) in strict mode",
            report.unresolved.len()
        );
    }

    println!("\nSchema is valid!");
    Ok(())
}
