//! Required-field classification

use crate::config::DocSettings;
use crate::model::FieldDef;

/// Decides whether a field is mandatory
///
/// A field is required if it carries the configured annotation or its doc
/// comment has a tag with the configured name. A missing doc comment leaves
/// only the annotation check.
#[derive(Debug, Clone, Copy)]
pub struct RequiredClassifier<'a> {
    annotation: &'a str,
    tag: &'a str,
}

impl<'a> RequiredClassifier<'a> {
    pub fn new(annotation: &'a str, tag: &'a str) -> Self {
        Self { annotation, tag }
    }

    pub fn from_settings(settings: &'a DocSettings) -> Self {
        Self::new(&settings.required_annotation, &settings.required_tag)
    }

    pub fn is_required(&self, field: &FieldDef) -> bool {
        let annotated = field.has_annotation(self.annotation);
        let tagged = field
            .doc
            .as_ref()
            .is_some_and(|doc| doc.find_tag(self.tag).is_some());

        annotated || tagged
    }
}
