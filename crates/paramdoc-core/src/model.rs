//! Materialized type model
//!
//! Classes, fields and type references form a closed, immutable graph. Type
//! references are a discriminated union, so traversal dispatches on the variant
//! rather than on presentable names.
//!
//! # Structure
//!
//! - [`TypeRef`]: a reference to a type as written at a use site
//! - [`ClassDef`]: a declared class with its fields
//! - [`FieldDef`]: a field with its type, modifiers, annotations and doc comment

use crate::value::{ExampleValue, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive value kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Char,
    ];

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Char => "char",
        }
    }

    /// The canonical zero value of this kind
    pub fn default_value(&self) -> ExampleValue {
        let scalar = match self {
            PrimitiveKind::Boolean => Scalar::Bool(false),
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int | PrimitiveKind::Long => {
                Scalar::Int(0)
            }
            PrimitiveKind::Float | PrimitiveKind::Double => Scalar::Float(0.0),
            PrimitiveKind::Char => Scalar::Char('\u{0}'),
        };
        ExampleValue::Scalar(scalar)
    }
}

/// A type as referenced from a field or return position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive such as `int` or `boolean`
    Primitive(PrimitiveKind),

    /// A type with a fixed catalog example value, such as `String`
    WellKnown(String),

    /// A generic type parameter such as `T`
    Placeholder(String),

    /// An array of the inner type
    Array(Box<TypeRef>),

    /// A collection (`List`, `Set`, ...); `element` is `None` for raw use
    Collection {
        name: String,
        element: Option<Box<TypeRef>>,
    },

    /// A map; keys are carried for display only
    Map {
        name: String,
        key: Option<Box<TypeRef>>,
        value: Option<Box<TypeRef>>,
    },

    /// A reference to a declared (or undeclared) class
    Class { name: String, args: Vec<TypeRef> },
}

impl TypeRef {
    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Class {
            name: name.into(),
            args,
        }
    }

    pub fn list_of(element: TypeRef) -> Self {
        TypeRef::Collection {
            name: "List".to_string(),
            element: Some(Box::new(element)),
        }
    }

    pub fn map_of(key: TypeRef, value: TypeRef) -> Self {
        TypeRef::Map {
            name: "Map".to_string(),
            key: Some(Box::new(key)),
            value: Some(Box::new(value)),
        }
    }

    pub fn array_of(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    /// Innermost component of a (possibly multi-dimensional) array.
    ///
    /// Returns `self` for non-array types.
    pub fn deep_component(&self) -> &TypeRef {
        let mut current = self;
        while let TypeRef::Array(inner) = current {
            current = inner;
        }
        current
    }

    /// Java-style text of the type, e.g. `Map<String, List<Foo>>`
    pub fn presentable_name(&self) -> String {
        self.to_string()
    }

    /// Collect the names of every class referenced anywhere in this type
    pub fn referenced_classes<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TypeRef::Primitive(_) | TypeRef::WellKnown(_) | TypeRef::Placeholder(_) => {}
            TypeRef::Array(inner) => inner.referenced_classes(out),
            TypeRef::Collection { element, .. } => {
                if let Some(element) = element {
                    element.referenced_classes(out);
                }
            }
            TypeRef::Map { key, value, .. } => {
                for part in [key, value].into_iter().flatten() {
                    part.referenced_classes(out);
                }
            }
            TypeRef::Class { name, args } => {
                out.push(name);
                for arg in args {
                    arg.referenced_classes(out);
                }
            }
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(kind) => write!(f, "{}", kind.keyword()),
            TypeRef::WellKnown(name) | TypeRef::Placeholder(name) => write!(f, "{name}"),
            TypeRef::Array(inner) => write!(f, "{inner}[]"),
            TypeRef::Collection { name, element } => match element {
                Some(element) => write!(f, "{name}<{element}>"),
                None => write!(f, "{name}"),
            },
            TypeRef::Map { name, key, value } => match (key, value) {
                (Some(key), Some(value)) => write!(f, "{name}<{key}, {value}>"),
                (Some(key), None) => write!(f, "{name}<{key}>"),
                _ => write!(f, "{name}"),
            },
            TypeRef::Class { name, args } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}

/// What kind of declaration a class is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Enum,
    Interface,
    Annotation,
}

impl ClassKind {
    /// Enums, interfaces and annotation types are never expanded
    pub fn is_opaque(&self) -> bool {
        !matches!(self, ClassKind::Class)
    }
}

/// A named tag inside a documentation comment (`@required`, `@mock 42`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTag {
    pub name: String,

    #[serde(default)]
    pub value: String,
}

/// A field's documentation comment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocComment {
    /// Description text without tags
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub tags: Vec<DocTag>,
}

impl DocComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(DocTag {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn find_tag(&self, name: &str) -> Option<&DocTag> {
        self.tags.iter().find(|tag| tag.name == name)
    }
}

/// A field declared on a class
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeRef,
    pub is_static: bool,
    /// Fully qualified annotation names
    pub annotations: Vec<String>,
    pub doc: Option<DocComment>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
            annotations: Vec::new(),
            doc: None,
        }
    }

    pub fn with_annotation(mut self, qualified_name: impl Into<String>) -> Self {
        self.annotations.push(qualified_name.into());
        self
    }

    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn has_annotation(&self, qualified_name: &str) -> bool {
        self.annotations.iter().any(|a| a == qualified_name)
    }

    /// Description text from the doc comment, or empty
    pub fn description(&self) -> &str {
        self.doc.as_ref().map_or("", |doc| doc.text.as_str())
    }
}

/// A declared class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    pub name: String,
    pub kind: ClassKind,
    pub type_params: Vec<String>,
    pub superclass: Option<String>,
    /// Own fields in declaration order
    pub fields: Vec<FieldDef>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_params: Vec::new(),
            superclass: None,
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_type_params(mut self, params: &[&str]) -> Self {
        self.type_params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    /// Name without package qualifier
    pub fn simple_name(&self) -> &str {
        simple_name(&self.name)
    }
}

/// Strip a package qualifier: `com.acme.User` → `User`
pub fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
