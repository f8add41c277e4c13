//! Traversal settings

use crate::catalog::TypeCatalog;
use crate::error::{DocError, DocResult};
use crate::value::Scalar;
use crate::LogLevel;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What to do when a class is re-entered while it is still being expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Emit a leaf node / empty object for the repeated branch
    #[default]
    Truncate,
    /// Abort the traversal with [`DocError::CyclicType`]
    Fail,
}

/// Settings shared by both tree builders
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSettings {
    /// Field names that never appear in either tree
    #[serde(default = "default_exclude_field_names")]
    pub exclude_field_names: BTreeSet<String>,

    /// Qualified annotation name that marks a field as required
    #[serde(default = "default_required_annotation")]
    pub required_annotation: String,

    /// Doc-comment tag name that marks a field as required
    #[serde(default = "default_required_tag")]
    pub required_tag: String,

    /// Qualified annotation names of framework-injected fields
    #[serde(default = "default_injection_annotations")]
    pub injection_annotations: BTreeSet<String>,

    /// Type names parsed as collections
    #[serde(default = "default_collection_types")]
    pub collection_types: BTreeSet<String>,

    /// Type names parsed as maps
    #[serde(default = "default_map_types")]
    pub map_types: BTreeSet<String>,

    /// Additional well-known types and their example values (JSON scalars)
    #[serde(default)]
    pub extra_well_known: IndexMap<String, serde_json::Value>,

    #[serde(default)]
    pub cycle_policy: CyclePolicy,

    /// Maximum number of nested class expansions
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_exclude_field_names() -> BTreeSet<String> {
    BTreeSet::from(["serialVersionUID".to_string()])
}

fn default_required_annotation() -> String {
    "javax.validation.constraints.NotNull".to_string()
}

fn default_required_tag() -> String {
    "required".to_string()
}

fn default_injection_annotations() -> BTreeSet<String> {
    BTreeSet::from([
        "javax.annotation.Resource".to_string(),
        "org.springframework.beans.factory.annotation.Autowired".to_string(),
    ])
}

fn default_collection_types() -> BTreeSet<String> {
    [
        "Collection",
        "List",
        "ArrayList",
        "LinkedList",
        "Set",
        "HashSet",
        "LinkedHashSet",
        "TreeSet",
        "SortedSet",
        "Queue",
        "Deque",
        "ArrayDeque",
        "Iterable",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_map_types() -> BTreeSet<String> {
    [
        "Map",
        "HashMap",
        "LinkedHashMap",
        "TreeMap",
        "SortedMap",
        "ConcurrentMap",
        "ConcurrentHashMap",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_max_depth() -> usize {
    32
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DocSettings {
    fn default() -> Self {
        Self {
            exclude_field_names: default_exclude_field_names(),
            required_annotation: default_required_annotation(),
            required_tag: default_required_tag(),
            injection_annotations: default_injection_annotations(),
            collection_types: default_collection_types(),
            map_types: default_map_types(),
            extra_well_known: IndexMap::new(),
            cycle_policy: CyclePolicy::default(),
            max_depth: default_max_depth(),
            log_level: default_log_level(),
        }
    }
}

impl DocSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings from JSON bytes; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> DocResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_json::from_slice(bytes)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> DocResult<()> {
        if self.required_tag.trim().is_empty() {
            return Err(DocError::ConfigError(
                "required_tag cannot be empty".to_string(),
            ));
        }

        if self.max_depth == 0 {
            return Err(DocError::ConfigError(
                "max_depth must be at least 1".to_string(),
            ));
        }

        self.log_level.parse::<LogLevel>()?;

        for (name, value) in &self.extra_well_known {
            if Scalar::from_json(value).is_none() {
                return Err(DocError::ConfigError(format!(
                    "extra_well_known entry '{name}' must be a string, number or boolean"
                )));
            }
        }

        Ok(())
    }

    /// Built-in catalog extended with `extra_well_known`
    pub fn catalog(&self) -> DocResult<TypeCatalog> {
        let extra = self
            .extra_well_known
            .iter()
            .map(|(name, value)| {
                Scalar::from_json(value)
                    .map(|scalar| (name.clone(), scalar))
                    .ok_or_else(|| {
                        DocError::ConfigError(format!(
                            "extra_well_known entry '{name}' is not a scalar"
                        ))
                    })
            })
            .collect::<DocResult<Vec<_>>>()?;

        Ok(TypeCatalog::builtin().with_entries(extra))
    }

    pub fn exclude_field(mut self, name: impl Into<String>) -> Self {
        self.exclude_field_names.insert(name.into());
        self
    }

    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
