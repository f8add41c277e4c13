//! Example payload builder
//!
//! Produces an [`ExampleValue`] shaped like an instance of a class: objects for
//! classes, one-element arrays for arrays and collections, catalog or zero
//! values for leaves.
//!
//! # Decision order per field
//!
//! 1. Framework-injected field → `""`
//! 2. Primitive → zero value
//! 3. Well-known → catalog value
//! 4. Array → `[element]`, element built from the deepest component type;
//!    `[{}]` when that component is an unresolvable class
//! 5. Collection → `[element]`; `[]` when the element is missing or unresolvable
//! 6. Map → `{}`
//! 7. Enum, interface or annotation type → `""`
//! 8. Class → nested object; a `T`/`K` placeholder is first substituted from
//!    the binding, and the nested object's own type arguments become the
//!    binding for its fields.

use crate::context::{DocContext, expansion_label};
use crate::error::DocResult;
use crate::generic::GenericBinding;
use crate::guard::{Entry, ExpansionStack};
use crate::model::{ClassDef, FieldDef, TypeRef};
use crate::value::ExampleValue;
use indexmap::IndexMap;

/// Builds example payloads
#[derive(Debug, Clone, Copy)]
pub struct ExampleTreeBuilder<'c> {
    ctx: &'c DocContext<'c>,
}

impl<'c> ExampleTreeBuilder<'c> {
    pub fn new(ctx: &'c DocContext<'c>) -> Self {
        Self { ctx }
    }

    /// Object with one member per participating field of `class`
    pub fn build(&self, class: &ClassDef, binding: &GenericBinding) -> DocResult<ExampleValue> {
        let mut stack = self.ctx.stack();
        self.object(class, binding.args(), binding, &mut stack)
    }

    /// Name and example value of a single field
    pub fn build_field(
        &self,
        field: &FieldDef,
        binding: &GenericBinding,
    ) -> DocResult<(String, ExampleValue)> {
        let mut stack = self.ctx.stack();
        let value = self.field_value(field, binding, &mut stack)?;
        Ok((field.name.clone(), value))
    }

    /// Response-body example for a method return type
    ///
    /// Returns `None` for primitive and well-known types, which have no body
    /// skeleton, and for unresolvable references.
    pub fn build_response(&self, return_type: &TypeRef) -> DocResult<Option<ExampleValue>> {
        if self.ctx.is_scalar(return_type) {
            return Ok(None);
        }

        let mut stack = self.ctx.stack();
        match return_type {
            TypeRef::Collection { element, .. } => {
                let element = match element {
                    Some(element) if !self.ctx.is_scalar(element) => element,
                    _ => return Ok(Some(ExampleValue::Array(Vec::new()))),
                };
                let item = match self.ctx.resolve_class(element) {
                    Some((class, args)) => {
                        self.object(class, args, &GenericBinding::from_args(args), &mut stack)?
                    }
                    None => ExampleValue::empty_object(),
                };
                Ok(Some(ExampleValue::Array(vec![item])))
            }
            TypeRef::Class { .. } => match self.ctx.resolve_class(return_type) {
                Some((class, args)) => {
                    let binding = GenericBinding::from_args(args);
                    Ok(Some(self.object(class, args, &binding, &mut stack)?))
                }
                None => Ok(None),
            },
            TypeRef::Placeholder(_) => Ok(None),
            _ => self
                .type_value(return_type, &GenericBinding::empty(), &mut stack)
                .map(Some),
        }
    }

    fn field_value(
        &self,
        field: &FieldDef,
        binding: &GenericBinding,
        stack: &mut ExpansionStack,
    ) -> DocResult<ExampleValue> {
        if self.ctx.filter().is_injected(field) {
            return Ok(ExampleValue::empty_string());
        }
        self.type_value(&field.ty, binding, stack)
    }

    fn type_value(
        &self,
        ty: &TypeRef,
        binding: &GenericBinding,
        stack: &mut ExpansionStack,
    ) -> DocResult<ExampleValue> {
        if let Some(value) = self.ctx.scalar_value(ty) {
            return Ok(value);
        }

        match ty {
            TypeRef::Array(_) => {
                let item = self
                    .element_value(ty.deep_component(), stack)?
                    .unwrap_or_else(ExampleValue::empty_object);
                Ok(ExampleValue::Array(vec![item]))
            }
            TypeRef::Collection { element, .. } => {
                let item = match element {
                    Some(element) => self.element_value(element, stack)?,
                    None => None,
                };
                Ok(ExampleValue::Array(item.into_iter().collect()))
            }
            TypeRef::Map { .. } => Ok(ExampleValue::empty_object()),
            TypeRef::Placeholder(_) => match binding.resolve(ty) {
                TypeRef::Placeholder(_) => Ok(ExampleValue::empty_object()),
                resolved => self.type_value(resolved, &GenericBinding::empty(), stack),
            },
            TypeRef::Class { .. } => match self.ctx.resolve_class(ty) {
                Some((class, _)) if class.kind.is_opaque() => Ok(ExampleValue::empty_string()),
                Some((class, args)) => {
                    self.object(class, args, &GenericBinding::from_args(args), stack)
                }
                None => Ok(ExampleValue::empty_object()),
            },
            TypeRef::Primitive(_) | TypeRef::WellKnown(_) => Ok(ExampleValue::empty_string()),
        }
    }

    /// Single element of an array or collection; `None` when it cannot be resolved
    fn element_value(
        &self,
        element: &TypeRef,
        stack: &mut ExpansionStack,
    ) -> DocResult<Option<ExampleValue>> {
        let unresolved = matches!(element, TypeRef::Class { .. })
            && !self.ctx.is_scalar(element)
            && self.ctx.resolve_class(element).is_none();
        if unresolved {
            return Ok(None);
        }
        self.type_value(element, &GenericBinding::empty(), stack)
            .map(Some)
    }

    fn object(
        &self,
        class: &ClassDef,
        args: &[TypeRef],
        binding: &GenericBinding,
        stack: &mut ExpansionStack,
    ) -> DocResult<ExampleValue> {
        if class.kind.is_opaque() {
            return Ok(ExampleValue::empty_object());
        }
        if stack.enter(&expansion_label(class, args))? == Entry::Truncate {
            return Ok(ExampleValue::empty_object());
        }

        let filter = self.ctx.filter();
        let members = self
            .ctx
            .graph()
            .all_fields(class)
            .into_iter()
            .filter(|field| filter.participates(field))
            .map(|field| Ok((field.name.clone(), self.field_value(field, binding, stack)?)))
            .collect::<DocResult<IndexMap<_, _>>>();

        stack.exit();
        members.map(ExampleValue::Object)
    }
}
