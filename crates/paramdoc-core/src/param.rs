//! Documentation tree

use serde::Serialize;

/// One parameter in a documentation tree
///
/// `name` is `None` only for the synthetic node describing a scalar response
/// body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamNode {
    pub name: Option<String>,
    pub type_label: String,
    pub required: bool,
    pub description: String,
    pub children: Vec<ParamNode>,
}

/// A [`ParamNode`] flattened for table display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamRow {
    pub depth: usize,
    pub name: String,
    pub type_label: String,
    pub required: bool,
    pub description: String,
}

impl ParamNode {
    /// A childless node
    pub fn leaf(name: Option<String>, type_label: impl Into<String>) -> Self {
        Self {
            name,
            type_label: type_label.into(),
            required: false,
            description: String::new(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, name: &str) -> Option<&ParamNode> {
        self.children
            .iter()
            .find(|c| c.name.as_deref() == Some(name))
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|c| c.name.as_deref())
            .collect()
    }

    /// Depth-first rows, this node at depth 0
    pub fn flatten(&self) -> Vec<ParamRow> {
        let mut rows = Vec::new();
        self.push_rows(0, &mut rows);
        rows
    }

    fn push_rows(&self, depth: usize, rows: &mut Vec<ParamRow>) {
        rows.push(ParamRow {
            depth,
            name: self.name.clone().unwrap_or_default(),
            type_label: self.type_label.clone(),
            required: self.required,
            description: self.description.clone(),
        });
        for child in &self.children {
            child.push_rows(depth + 1, rows);
        }
    }
}

/// Flatten a list of sibling roots
pub fn flatten_all(nodes: &[ParamNode]) -> Vec<ParamRow> {
    nodes.iter().flat_map(ParamNode::flatten).collect()
}
