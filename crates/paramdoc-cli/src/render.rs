//! Output formatting for documentation trees and example payloads

use anyhow::{Context, Result};
use clap::ValueEnum;
use paramdoc_core::{ExampleValue, ParamNode, ParamRow, flatten_all};

/// Output format for documentation trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Nested JSON nodes
    Json,
    /// Indented text table
    #[default]
    Table,
}

const HEADERS: [&str; 4] = ["NAME", "TYPE", "REQUIRED", "DESCRIPTION"];

/// Label for the unnamed node of a scalar response
const BODY_LABEL: &str = "(body)";

pub fn params(nodes: &[ParamNode], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string_pretty(nodes).context("Failed to encode documentation tree")
        }
        Format::Table => Ok(table(&flatten_all(nodes))),
    }
}

/// Pretty JSON; a missing body renders as `null`
pub fn example(value: Option<&ExampleValue>) -> Result<String> {
    let json = value.map_or(serde_json::Value::Null, ExampleValue::to_json);
    serde_json::to_string_pretty(&json).context("Failed to encode example")
}

fn table(rows: &[ParamRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            let name = if row.name.is_empty() {
                BODY_LABEL
            } else {
                row.name.as_str()
            };
            [
                format!("{}{}", "  ".repeat(row.depth), name),
                row.type_label.clone(),
                if row.required { "yes" } else { "no" }.to_string(),
                row.description.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
#[path = "render/render_tests.rs"]
mod render_tests;
