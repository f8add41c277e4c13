//! Generic placeholder binding
//!
//! Only two slots are resolvable: `T` binds to the first type argument and `K`
//! to the second. Any other placeholder, or a slot with no argument, stays
//! unresolved and is rendered by name.

use crate::model::TypeRef;

/// Placeholder names in slot order
pub const PLACEHOLDER_SLOTS: [&str; 2] = ["T", "K"];

/// Concrete type arguments of the enclosing generic context
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericBinding {
    args: Vec<TypeRef>,
}

impl GenericBinding {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bind from a reference's type arguments; arguments past the last slot are dropped
    pub fn from_args(args: &[TypeRef]) -> Self {
        Self {
            args: args.iter().take(PLACEHOLDER_SLOTS.len()).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn args(&self) -> &[TypeRef] {
        &self.args
    }

    /// The type bound to a placeholder name
    pub fn slot(&self, placeholder: &str) -> Option<&TypeRef> {
        let index = PLACEHOLDER_SLOTS.iter().position(|p| *p == placeholder)?;
        self.args.get(index)
    }

    /// Substitute a bound placeholder; every other type is returned unchanged
    pub fn resolve<'t>(&'t self, ty: &'t TypeRef) -> &'t TypeRef {
        match ty {
            TypeRef::Placeholder(name) => self.slot(name).unwrap_or(ty),
            _ => ty,
        }
    }
}
