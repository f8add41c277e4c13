//! Documentation tree builder
//!
//! Walks a field's type and produces a [`ParamNode`] tree: one node per
//! participating field, with nested object fields as children.
//!
//! # Decision order
//!
//! 1. Substitute a `T`/`K` placeholder from the binding.
//! 2. Primitive or well-known → leaf.
//! 3. Array or collection → children are the element class's fields
//!    (one flattened level, not one per slot).
//! 4. Map → same as 3, using the value type; keys are not modeled.
//! 5. Class → children are the class's fields; enums, interfaces, annotation
//!    types and unresolvable references are leaves.
//!
//! Substitution applies to the fields of the class being documented only:
//! children are built with an empty binding.

use crate::context::{DocContext, expansion_label};
use crate::error::DocResult;
use crate::generic::GenericBinding;
use crate::guard::{Entry, ExpansionStack};
use crate::model::{ClassDef, FieldDef, TypeRef};
use crate::param::ParamNode;

/// Builds documentation trees
#[derive(Debug, Clone, Copy)]
pub struct ParamTreeBuilder<'c> {
    ctx: &'c DocContext<'c>,
}

impl<'c> ParamTreeBuilder<'c> {
    pub fn new(ctx: &'c DocContext<'c>) -> Self {
        Self { ctx }
    }

    /// Documentation node for a single field
    pub fn build_field(&self, field: &FieldDef, binding: &GenericBinding) -> DocResult<ParamNode> {
        let mut stack = self.ctx.stack();
        self.field_node(field, binding, &mut stack)
    }

    /// One node per participating field of a root class
    pub fn build_class(&self, class: &ClassDef, binding: &GenericBinding) -> DocResult<Vec<ParamNode>> {
        let mut stack = self.ctx.stack();
        self.class_fields(class, binding.args(), binding, &mut stack)
    }

    /// Documentation rows for a method return type
    ///
    /// A primitive or well-known type yields one unnamed node; a collection
    /// yields its element class's fields; any other class yields its own
    /// fields bound to the reference's type arguments.
    pub fn build_response(&self, return_type: &TypeRef) -> DocResult<Vec<ParamNode>> {
        if self.ctx.is_scalar(return_type) {
            return Ok(vec![ParamNode::leaf(None, return_type.presentable_name())]);
        }

        let mut stack = self.ctx.stack();
        match return_type {
            TypeRef::Collection {
                element: Some(element),
                ..
            } => self.element_fields(element, &mut stack),
            TypeRef::Array(_) => self.element_fields(return_type.deep_component(), &mut stack),
            TypeRef::Class { .. } => match self.ctx.resolve_class(return_type) {
                Some((class, args)) => {
                    self.class_fields(class, args, &GenericBinding::from_args(args), &mut stack)
                }
                None => Ok(Vec::new()),
            },
            _ => Ok(Vec::new()),
        }
    }

    fn element_fields(&self, element: &TypeRef, stack: &mut ExpansionStack) -> DocResult<Vec<ParamNode>> {
        if self.ctx.is_scalar(element) {
            return Ok(Vec::new());
        }
        match self.ctx.resolve_class(element) {
            Some((class, args)) => self.class_fields(class, args, &GenericBinding::empty(), stack),
            None => Ok(Vec::new()),
        }
    }

    fn field_node(
        &self,
        field: &FieldDef,
        binding: &GenericBinding,
        stack: &mut ExpansionStack,
    ) -> DocResult<ParamNode> {
        let ty = binding.resolve(&field.ty);

        Ok(ParamNode {
            name: Some(field.name.clone()),
            type_label: ty.presentable_name(),
            required: self.ctx.required().is_required(field),
            description: field.description().to_string(),
            children: self.children_of(ty, stack)?,
        })
    }

    fn children_of(&self, ty: &TypeRef, stack: &mut ExpansionStack) -> DocResult<Vec<ParamNode>> {
        if self.ctx.is_scalar(ty) {
            return Ok(Vec::new());
        }

        match ty {
            TypeRef::Array(_) => self.children_of(ty.deep_component(), stack),
            TypeRef::Collection { element, .. } => match element {
                Some(element) => self.children_of(element, stack),
                None => Ok(Vec::new()),
            },
            TypeRef::Map { value, .. } => match value {
                Some(value) => self.children_of(value, stack),
                None => Ok(Vec::new()),
            },
            TypeRef::Class { .. } => match self.ctx.resolve_class(ty) {
                Some((class, args)) => {
                    self.class_fields(class, args, &GenericBinding::empty(), stack)
                }
                None => Ok(Vec::new()),
            },
            // Unbound placeholders render by name and are not expanded
            TypeRef::Placeholder(_) | TypeRef::Primitive(_) | TypeRef::WellKnown(_) => {
                Ok(Vec::new())
            }
        }
    }

    fn class_fields(
        &self,
        class: &ClassDef,
        args: &[TypeRef],
        binding: &GenericBinding,
        stack: &mut ExpansionStack,
    ) -> DocResult<Vec<ParamNode>> {
        if class.kind.is_opaque() {
            return Ok(Vec::new());
        }
        if stack.enter(&expansion_label(class, args))? == Entry::Truncate {
            return Ok(Vec::new());
        }

        let filter = self.ctx.filter();
        let nodes = self
            .ctx
            .graph()
            .all_fields(class)
            .into_iter()
            .filter(|field| filter.participates(field))
            .map(|field| self.field_node(field, binding, stack))
            .collect::<DocResult<Vec<_>>>();

        stack.exit();
        nodes
    }
}
