//! Field participation

use crate::config::DocSettings;
use crate::model::FieldDef;
use std::collections::BTreeSet;

/// Decides which fields take part in traversal
///
/// The same filter is applied unchanged at every depth.
#[derive(Debug, Clone, Copy)]
pub struct FieldFilter<'a> {
    excluded: &'a BTreeSet<String>,
    injection: &'a BTreeSet<String>,
}

impl<'a> FieldFilter<'a> {
    pub fn new(excluded: &'a BTreeSet<String>, injection: &'a BTreeSet<String>) -> Self {
        Self {
            excluded,
            injection,
        }
    }

    pub fn from_settings(settings: &'a DocSettings) -> Self {
        Self::new(
            &settings.exclude_field_names,
            &settings.injection_annotations,
        )
    }

    /// False for static fields and excluded names
    pub fn participates(&self, field: &FieldDef) -> bool {
        !field.is_static && !self.excluded.contains(&field.name)
    }

    /// True if any annotation marks the field as framework-injected
    pub fn is_injected(&self, field: &FieldDef) -> bool {
        field
            .annotations
            .iter()
            .any(|annotation| self.injection.contains(annotation))
    }
}
