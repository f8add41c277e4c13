//! # paramdoc
//!
//! Parameter documentation trees and example JSON payloads from a class graph.
//!
//! Given the declared fields of a set of classes, paramdoc produces:
//! - a documentation tree: field names, type labels, required flags and
//!   descriptions, nested for object-typed fields
//! - an example payload: one plausible instance of the class, ready to be
//!   encoded as JSON
//!
//! ## Quick Start
//!
//! ```
//! use paramdoc::prelude::*;
//!
//! let doc = SchemaDocument::from_json(br#"{
//!     "classes": [
//!         { "name": "User", "fields": [
//!             { "name": "id", "type": "long",
//!               "annotations": ["javax.validation.constraints.NotNull"] },
//!             { "name": "tags", "type": "List<String>" }
//!         ]}
//!     ]
//! }"#)?;
//!
//! let settings = DocSettings::default();
//! let graph = TypeGraph::from_schema(&doc, &settings)?;
//! let ctx = DocContext::new(&graph, &settings)?;
//! let user = graph.resolve("User").expect("declared above");
//!
//! let params = ctx.param_tree().build_class(user, &GenericBinding::empty())?;
//! assert!(params[0].required);
//!
//! let example = ctx.example_tree().build(user, &GenericBinding::empty())?;
//! assert_eq!(example.to_json().to_string(), r#"{"id":0,"tags":[""]}"#);
//! # Ok::<(), DocError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`paramdoc_core`] - Type model, settings and both tree builders
//! - [`paramdoc_logging`] - Subscriber setup and level reloading

// Re-export core types
pub use paramdoc_core::{
    ClassDef, ClassKind, ClassSpec, CyclePolicy, DocComment, DocContext, DocError, DocResult,
    DocSettings, DocTag, ExampleTreeBuilder, ExampleValue, FieldDef, FieldFilter, FieldSpec,
    GenericBinding, LogLevel, PLACEHOLDER_SLOTS, ParamNode, ParamRow, ParamTreeBuilder,
    PrimitiveKind, RequiredClassifier, Scalar, SchemaDocument, TypeCatalog, TypeGraph,
    TypeParser, TypeRef, flatten_all, simple_name,
};

// Re-export logging setup
pub use paramdoc_logging::{DiagnosticCounts, ReloadHandle, init_logging};

// Re-export common dependencies
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use paramdoc::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use paramdoc_core::prelude::*;

    pub use crate::init_logging;
}
