//! Type graph and schema documents
//!
//! A [`SchemaDocument`] is the serialized form of a class graph, with field
//! types written as type expressions. [`TypeGraph::from_schema`] parses it into
//! an immutable graph the tree builders walk.
//!
//! # Example
//!
//! ```
//! use paramdoc_core::{DocSettings, SchemaDocument, TypeGraph};
//!
//! let doc = SchemaDocument::from_json(br#"{
//!     "classes": [
//!         { "name": "User", "fields": [
//!             { "name": "id", "type": "long" },
//!             { "name": "tags", "type": "List<String>" }
//!         ]}
//!     ]
//! }"#).unwrap();
//!
//! let graph = TypeGraph::from_schema(&doc, &DocSettings::default()).unwrap();
//! assert_eq!(graph.len(), 1);
//! ```

use crate::config::DocSettings;
use crate::error::{DocError, DocResult};
use crate::model::{ClassDef, ClassKind, DocComment, FieldDef, simple_name};
use crate::parser::TypeParser;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Serialized class graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub classes: Vec<ClassSpec>,
}

/// Serialized class declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSpec {
    pub name: String,

    #[serde(default)]
    pub kind: ClassKind,

    #[serde(default)]
    pub type_params: Vec<String>,

    #[serde(default)]
    pub extends: Option<String>,

    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// Serialized field declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    /// Type expression, e.g. `List<Address>`
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    #[serde(default)]
    pub annotations: Vec<String>,

    #[serde(default)]
    pub doc: Option<DocComment>,
}

impl SchemaDocument {
    pub fn from_json(bytes: &[u8]) -> DocResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// An immutable, fully materialized class graph
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    classes: IndexMap<String, ClassDef>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every class and field type of a schema document
    pub fn from_schema(doc: &SchemaDocument, settings: &DocSettings) -> DocResult<Self> {
        let parser = TypeParser::new(settings)?
            .with_declared_classes(doc.classes.iter().map(|c| c.name.as_str()));

        let mut graph = Self::new();
        for spec in &doc.classes {
            if spec.name.trim().is_empty() {
                return Err(DocError::InvalidSchema(
                    "class name cannot be empty".to_string(),
                ));
            }

            let scoped = parser.clone().with_type_params(&spec.type_params);
            let mut class = ClassDef::new(spec.name.clone(), spec.kind);
            class.type_params = spec.type_params.clone();
            class.superclass = spec.extends.clone();

            let mut seen = HashSet::new();
            for field in &spec.fields {
                if field.name.trim().is_empty() {
                    return Err(DocError::InvalidSchema(format!(
                        "class '{}' has a field with an empty name",
                        spec.name
                    )));
                }
                if !seen.insert(field.name.as_str()) {
                    return Err(DocError::InvalidSchema(format!(
                        "class '{}' declares field '{}' twice",
                        spec.name, field.name
                    )));
                }

                class.fields.push(FieldDef {
                    name: field.name.clone(),
                    ty: scoped.parse(&field.ty)?,
                    is_static: field.is_static,
                    annotations: field.annotations.clone(),
                    doc: field.doc.clone(),
                });
            }

            graph.insert(class)?;
        }

        Ok(graph)
    }

    /// Add a class; names must be unique
    pub fn insert(&mut self, class: ClassDef) -> DocResult<()> {
        if self.classes.contains_key(&class.name) {
            return Err(DocError::DuplicateClass(class.name));
        }
        self.classes.insert(class.name.clone(), class);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_class(mut self, class: ClassDef) -> DocResult<Self> {
        self.insert(class)?;
        Ok(self)
    }

    /// Find a class by exact name, falling back to a unique simple-name match
    pub fn resolve(&self, name: &str) -> Option<&ClassDef> {
        if let Some(class) = self.classes.get(name) {
            return Some(class);
        }

        let simple = simple_name(name);
        let mut matches = self.classes.values().filter(|c| c.simple_name() == simple);
        match (matches.next(), matches.next()) {
            (Some(class), None) => Some(class),
            _ => None,
        }
    }

    /// Own fields followed by inherited fields, nearest superclass first.
    ///
    /// A superclass chain that loops back on itself is cut at the first repeat;
    /// an unresolvable superclass ends the chain.
    pub fn all_fields<'g>(&'g self, class: &'g ClassDef) -> Vec<&'g FieldDef> {
        let mut fields: Vec<&FieldDef> = class.fields.iter().collect();
        let mut visited = HashSet::from([class.name.as_str()]);
        let mut next = class.superclass.as_deref();

        while let Some(super_name) = next {
            let Some(parent) = self.resolve(super_name) else {
                tracing::debug!(class = %class.name, superclass = super_name, "unresolved superclass");
                break;
            };
            if !visited.insert(parent.name.as_str()) {
                tracing::debug!(class = %class.name, superclass = %parent.name, "cyclic superclass chain");
                break;
            }
            fields.extend(parent.fields.iter());
            next = parent.superclass.as_deref();
        }

        fields
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.values()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class names referenced by fields or `extends` that do not resolve
    pub fn unresolved_references(&self) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for class in self.classes.values() {
            let mut names = Vec::new();
            for field in &class.fields {
                field.ty.referenced_classes(&mut names);
            }
            names.extend(class.superclass.as_deref());

            for name in names {
                if self.resolve(name).is_none() && !missing.iter().any(|m| m == name) {
                    missing.push(name.to_string());
                }
            }
        }
        missing
    }
}
