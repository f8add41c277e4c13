//! Shared traversal context
//!
//! A [`DocContext`] bundles the graph, the settings and the catalog built from
//! them. Both tree builders borrow it; each public build call starts with a
//! fresh expansion stack, so no state carries over between calls.

use crate::catalog::TypeCatalog;
use crate::config::DocSettings;
use crate::error::DocResult;
use crate::example_tree::ExampleTreeBuilder;
use crate::filter::FieldFilter;
use crate::graph::TypeGraph;
use crate::guard::ExpansionStack;
use crate::model::{ClassDef, TypeRef};
use crate::param_tree::ParamTreeBuilder;
use crate::required::RequiredClassifier;
use crate::value::ExampleValue;

/// Graph, settings and catalog for one documentation session
#[derive(Debug)]
pub struct DocContext<'a> {
    graph: &'a TypeGraph,
    settings: &'a DocSettings,
    catalog: TypeCatalog,
}

impl<'a> DocContext<'a> {
    pub fn new(graph: &'a TypeGraph, settings: &'a DocSettings) -> DocResult<Self> {
        settings.validate()?;
        Ok(Self {
            graph,
            settings,
            catalog: settings.catalog()?,
        })
    }

    pub fn graph(&self) -> &'a TypeGraph {
        self.graph
    }

    pub fn settings(&self) -> &'a DocSettings {
        self.settings
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn filter(&self) -> FieldFilter<'a> {
        FieldFilter::from_settings(self.settings)
    }

    pub fn required(&self) -> RequiredClassifier<'a> {
        RequiredClassifier::from_settings(self.settings)
    }

    pub fn param_tree(&self) -> ParamTreeBuilder<'_> {
        ParamTreeBuilder::new(self)
    }

    pub fn example_tree(&self) -> ExampleTreeBuilder<'_> {
        ExampleTreeBuilder::new(self)
    }

    pub(crate) fn stack(&self) -> ExpansionStack {
        ExpansionStack::new(self.settings.cycle_policy, self.settings.max_depth)
    }

    /// Example value of a primitive or well-known type; `None` for anything else
    pub(crate) fn scalar_value(&self, ty: &TypeRef) -> Option<ExampleValue> {
        match ty {
            TypeRef::Primitive(kind) => Some(kind.default_value()),
            TypeRef::WellKnown(name) => Some(
                self.catalog
                    .lookup(name)
                    .unwrap_or_else(ExampleValue::empty_string),
            ),
            TypeRef::Class { name, args } if args.is_empty() => self.catalog.lookup(name),
            _ => None,
        }
    }

    pub(crate) fn is_scalar(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Primitive(_) | TypeRef::WellKnown(_) => true,
            TypeRef::Class { name, args } => args.is_empty() && self.catalog.contains(name),
            _ => false,
        }
    }

    /// Resolve a class reference to its declaration and type arguments
    pub(crate) fn resolve_class<'t>(&self, ty: &'t TypeRef) -> Option<(&'a ClassDef, &'t [TypeRef])> {
        let TypeRef::Class { name, args } = ty else {
            return None;
        };
        match self.graph.resolve(name) {
            Some(class) => Some((class, args.as_slice())),
            None => {
                tracing::debug!(class = %name, "unresolved class reference");
                None
            }
        }
    }
}

/// Stack label of a class expanded with the given type arguments
pub(crate) fn expansion_label(class: &ClassDef, args: &[TypeRef]) -> String {
    TypeRef::generic(class.name.clone(), args.to_vec()).presentable_name()
}
