//! Type expression parser
//!
//! Turns Java-style type text (`List<Map<String, Foo>>`, `int[][]`,
//! `Result<Page<User>>`) into a [`TypeRef`].
//!
//! # Classification
//!
//! | Text | Variant |
//! |------|---------|
//! | `int`, `boolean`, ... | [`TypeRef::Primitive`] |
//! | catalog name (`String`, `Long`, ...) | [`TypeRef::WellKnown`] |
//! | trailing `[]` | [`TypeRef::Array`] |
//! | configured collection name | [`TypeRef::Collection`] |
//! | configured map name | [`TypeRef::Map`] |
//! | single upper-case letter or declared type parameter | [`TypeRef::Placeholder`] |
//! | anything else | [`TypeRef::Class`] |

use crate::catalog::TypeCatalog;
use crate::config::DocSettings;
use crate::error::{DocError, DocResult};
use crate::model::{PrimitiveKind, TypeRef, simple_name};
use std::collections::BTreeSet;

/// Parser for type expressions
#[derive(Debug, Clone)]
pub struct TypeParser {
    catalog: TypeCatalog,
    collection_types: BTreeSet<String>,
    map_types: BTreeSet<String>,
    declared_classes: BTreeSet<String>,
    type_params: BTreeSet<String>,
}

impl TypeParser {
    pub fn new(settings: &DocSettings) -> DocResult<Self> {
        Ok(Self {
            catalog: settings.catalog()?,
            collection_types: settings.collection_types.clone(),
            map_types: settings.map_types.clone(),
            declared_classes: BTreeSet::new(),
            type_params: BTreeSet::new(),
        })
    }

    /// Class names that must never be read as placeholders
    pub fn with_declared_classes<'s>(mut self, names: impl IntoIterator<Item = &'s str>) -> Self {
        self.declared_classes = names
            .into_iter()
            .map(|name| simple_name(name).to_string())
            .collect();
        self
    }

    /// Type parameters in scope; these parse as placeholders whatever their length
    pub fn with_type_params(mut self, params: &[String]) -> Self {
        self.type_params = params.iter().cloned().collect();
        self
    }

    /// Parse a complete type expression
    pub fn parse(&self, input: &str) -> DocResult<TypeRef> {
        let mut cursor = Cursor::new(input);
        let ty = self.parse_type(&mut cursor)?;
        cursor.skip_ws();
        if let Some(c) = cursor.peek() {
            return Err(DocError::type_syntax(
                input,
                format!("unexpected '{c}' at offset {}", cursor.pos),
            ));
        }
        Ok(ty)
    }

    fn parse_type(&self, cursor: &mut Cursor<'_>) -> DocResult<TypeRef> {
        cursor.skip_ws();

        // Wildcards: `? extends Foo` and `? super Foo` read as `Foo`, bare `?` as Object
        if cursor.eat('?') {
            cursor.skip_ws();
            return match cursor.peek_ident() {
                Some("extends") | Some("super") => {
                    cursor.ident();
                    self.parse_type(cursor)
                }
                _ => Ok(TypeRef::class("Object")),
            };
        }

        let name = cursor
            .ident()
            .ok_or_else(|| cursor.error("expected a type name"))?;

        let mut args = Vec::new();
        cursor.skip_ws();
        if cursor.eat('<') {
            loop {
                args.push(self.parse_type(cursor)?);
                cursor.skip_ws();
                if cursor.eat(',') {
                    continue;
                }
                if cursor.eat('>') {
                    break;
                }
                return Err(match cursor.peek() {
                    Some(c) => cursor.error(&format!("unexpected '{c}' in type arguments")),
                    None => cursor.error("unclosed '<'"),
                });
            }
        }

        let mut ty = self.classify(cursor, name, args)?;

        loop {
            cursor.skip_ws();
            if !cursor.eat('[') {
                break;
            }
            cursor.skip_ws();
            if !cursor.eat(']') {
                return Err(cursor.error("expected ']'"));
            }
            ty = TypeRef::Array(Box::new(ty));
        }

        Ok(ty)
    }

    fn classify(&self, cursor: &Cursor<'_>, name: &str, args: Vec<TypeRef>) -> DocResult<TypeRef> {
        let simple = simple_name(name);

        if let Some(kind) = PrimitiveKind::from_keyword(name) {
            if !args.is_empty() {
                return Err(cursor.error(&format!("primitive '{name}' cannot take type arguments")));
            }
            return Ok(TypeRef::Primitive(kind));
        }

        if args.is_empty() && self.catalog.contains(simple) {
            return Ok(TypeRef::WellKnown(simple.to_string()));
        }

        if self.collection_types.contains(simple) {
            return Ok(TypeRef::Collection {
                name: simple.to_string(),
                element: args.into_iter().next().map(Box::new),
            });
        }

        if self.map_types.contains(simple) {
            let mut args = args.into_iter();
            return Ok(TypeRef::Map {
                name: simple.to_string(),
                key: args.next().map(Box::new),
                value: args.next().map(Box::new),
            });
        }

        if args.is_empty() && self.is_placeholder(name) {
            return Ok(TypeRef::Placeholder(name.to_string()));
        }

        Ok(TypeRef::Class {
            name: name.to_string(),
            args,
        })
    }

    fn is_placeholder(&self, name: &str) -> bool {
        if self.type_params.contains(name) {
            return true;
        }
        let mut chars = name.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
            && !self.declared_classes.contains(name)
    }
}

struct Cursor<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn ident_len(&self) -> usize {
        self.rest()
            .char_indices()
            .find(|(_, c)| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '.')))
            .map_or(self.rest().len(), |(i, _)| i)
    }

    fn peek_ident(&self) -> Option<&'s str> {
        let len = self.ident_len();
        (len > 0).then(|| &self.rest()[..len])
    }

    fn ident(&mut self) -> Option<&'s str> {
        let ident = self.peek_ident()?;
        self.pos += ident.len();
        Some(ident)
    }

    fn error(&self, reason: &str) -> DocError {
        DocError::type_syntax(self.src, reason)
    }
}
