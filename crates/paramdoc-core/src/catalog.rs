//! Well-known type catalog
//!
//! Maps type names to a fixed example value. Lookup is by simple name, so
//! `java.lang.String` and `String` share an entry.

use crate::model::simple_name;
use crate::value::{ExampleValue, Scalar};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<IndexMap<&'static str, Scalar>> = Lazy::new(|| {
    let zero = || Scalar::Int(0);
    let zero_f = || Scalar::Float(0.0);
    let text = |s: &str| Scalar::Str(s.to_string());

    IndexMap::from([
        // Primitives
        ("boolean", Scalar::Bool(false)),
        ("byte", zero()),
        ("short", zero()),
        ("int", zero()),
        ("long", zero()),
        ("float", zero_f()),
        ("double", zero_f()),
        ("char", Scalar::Char('\u{0}')),
        // Boxed primitives
        ("Boolean", Scalar::Bool(false)),
        ("Byte", zero()),
        ("Short", zero()),
        ("Integer", zero()),
        ("Long", zero()),
        ("Float", zero_f()),
        ("Double", zero_f()),
        ("Character", text("")),
        // Numbers
        ("Number", zero()),
        ("BigInteger", zero()),
        ("BigDecimal", zero_f()),
        ("AtomicInteger", zero()),
        ("AtomicLong", zero()),
        // Text
        ("String", text("")),
        ("CharSequence", text("")),
        ("StringBuilder", text("")),
        // Date and time
        ("Date", text("2024-01-01 00:00:00")),
        ("Timestamp", text("2024-01-01 00:00:00")),
        ("LocalDateTime", text("2024-01-01 00:00:00")),
        ("LocalDate", text("2024-01-01")),
        ("LocalTime", text("00:00:00")),
        ("Instant", text("2024-01-01T00:00:00Z")),
        ("OffsetDateTime", text("2024-01-01T00:00:00Z")),
        ("ZonedDateTime", text("2024-01-01T00:00:00Z")),
        // Misc
        ("UUID", text("00000000-0000-0000-0000-000000000000")),
    ])
});

/// Lookup table from well-known type names to example scalars
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    entries: IndexMap<String, Scalar>,
}

impl TypeCatalog {
    /// The built-in catalog
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
        }
    }

    /// Add or replace entries
    pub fn with_entries(mut self, extra: impl IntoIterator<Item = (String, Scalar)>) -> Self {
        self.entries.extend(extra);
        self
    }

    pub fn lookup(&self, type_name: &str) -> Option<ExampleValue> {
        self.entries
            .get(simple_name(type_name))
            .cloned()
            .map(ExampleValue::Scalar)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(simple_name(type_name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
