//! paramdoc-core - Type-graph introspection engine
//!
//! Given a graph of class declarations, this crate produces two artifacts per
//! class or method return type:
//! - a [`ParamNode`] tree for human-readable parameter documentation
//! - an [`ExampleValue`] payload shaped like an instance of the type
//!
//! The entry point is [`DocContext`], which borrows a [`TypeGraph`] and
//! [`DocSettings`] and hands out the two builders.
//!
//! ```
//! use paramdoc_core::prelude::*;
//!
//! let graph = TypeGraph::new()
//!     .with_class(
//!         ClassDef::new("Foo", ClassKind::Class)
//!             .with_field(FieldDef::new("a", TypeRef::Primitive(PrimitiveKind::Int))),
//!     )
//!     .unwrap();
//! let settings = DocSettings::default();
//! let ctx = DocContext::new(&graph, &settings).unwrap();
//!
//! let foo = graph.resolve("Foo").unwrap();
//! let example = ctx.example_tree().build(foo, &GenericBinding::empty()).unwrap();
//! assert_eq!(example.to_json().to_string(), r#"{"a":0}"#);
//! ```

mod catalog;
mod config;
mod context;
mod error;
mod example_tree;
mod filter;
mod generic;
mod graph;
mod guard;
mod model;
mod param;
mod param_tree;
mod parser;
mod required;
mod value;

#[cfg(test)]
mod fixtures;

pub use catalog::TypeCatalog;
pub use config::{CyclePolicy, DocSettings};
pub use context::DocContext;
pub use error::{DocError, DocResult};
pub use example_tree::ExampleTreeBuilder;
pub use filter::FieldFilter;
pub use generic::{GenericBinding, PLACEHOLDER_SLOTS};
pub use graph::{ClassSpec, FieldSpec, SchemaDocument, TypeGraph};
pub use model::{
    ClassDef, ClassKind, DocComment, DocTag, FieldDef, PrimitiveKind, TypeRef, simple_name,
};
pub use param::{ParamNode, ParamRow, flatten_all};
pub use param_tree::ParamTreeBuilder;
pub use parser::TypeParser;
pub use required::RequiredClassifier;
pub use value::{ExampleValue, Scalar};

/// Diagnostic log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = DocError;

    /// Case-insensitive; `warning` is accepted as an alias for `warn`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(DocError::ConfigError(format!("unknown log level '{other}'"))),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassDef, ClassKind, CyclePolicy, DocComment, DocContext, DocError, DocResult,
        DocSettings, ExampleValue, FieldDef, GenericBinding, LogLevel, ParamNode, ParamRow,
        PrimitiveKind, SchemaDocument, TypeGraph, TypeParser, TypeRef,
    };
}
