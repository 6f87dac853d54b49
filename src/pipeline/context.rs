use std::collections::BTreeMap;
use std::fmt;
use serde::{Serialize, Serializer};
use crate::tagging::decoder::DimensionLevels;
use crate::tagging::dimension::Dimension;

pub const CONTENT_DESCRIPTOR_KEY: &str = "content_descriptor";
pub const UNLABELED: &str = "Unlabeled";

/// A single metadata value. Serializes as a bare JSON number or string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Number(u32),
    Text(String),
    /// The dimension is not determined by the sample's naming grammar.
    Unlabeled,
}

impl Serialize for MetadataValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetadataValue::Number(n) => serializer.serialize_u32(*n),
            MetadataValue::Text(s) => serializer.serialize_str(s),
            MetadataValue::Unlabeled => serializer.serialize_str(UNLABELED),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Number(n) => write!(f, "{}", n),
            MetadataValue::Text(s) => write!(f, "{}", s),
            MetadataValue::Unlabeled => write!(f, "{}", UNLABELED),
        }
    }
}

impl From<u32> for MetadataValue {
    fn from(n: u32) -> Self {
        MetadataValue::Number(n)
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

/// Who recorded and who evaluated the samples. Seeded into every bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub metadata_version: String,
    pub whose_voice_is_it: String,
    pub who_evaluated_the_dimensions: String,
}

impl Default for Provenance {
    fn default() -> Self {
        Self {
            metadata_version: "0.0.1".to_string(),
            whose_voice_is_it: "Chloe".to_string(),
            who_evaluated_the_dimensions: "Chloe".to_string(),
        }
    }
}

/// Changes applied on top of a parent context by [`MetadataContext::derive`].
#[derive(Debug, Clone, Default)]
pub struct ContextDelta {
    values: Vec<(String, MetadataValue)>,
    components: Vec<String>,
}

impl ContextDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.values.push((key.into(), value.into()));
        self
    }

    pub fn unlabeled(mut self, dimension: Dimension) -> Self {
        self.values.push((dimension.to_string(), MetadataValue::Unlabeled));
        self
    }

    pub fn levels(mut self, levels: &DimensionLevels) -> Self {
        for (dimension, score) in levels {
            self.values.push((dimension.to_string(), MetadataValue::Number(*score)));
        }
        self
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.components.push(component.into());
        self
    }
}

/// Metadata accumulated while descending the raw tree, plus the name
/// components of the bundle directory the leaf will be written to.
///
/// Contexts are never modified in place. Each level of the traversal derives
/// its own copy, so sibling branches cannot observe one another's keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataContext {
    metadata: BTreeMap<String, MetadataValue>,
    path_components: Vec<String>,
}

impl MetadataContext {
    pub fn root(provenance: &Provenance) -> Self {
        Self::default().derive(
            ContextDelta::new()
                .value("metadata_version", provenance.metadata_version.as_str())
                .value("whose_voice_is_it", provenance.whose_voice_is_it.as_str())
                .value("who_evaluated_the_dimensions", provenance.who_evaluated_the_dimensions.as_str()),
        )
    }

    /// A new context holding this one's keys overridden by `delta`, with
    /// `delta`'s path components appended.
    pub fn derive(&self, delta: ContextDelta) -> Self {
        let mut metadata = self.metadata.clone();
        metadata.extend(delta.values);

        let mut path_components = self.path_components.clone();
        path_components.extend(delta.components);

        Self { metadata, path_components }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    pub fn metadata(&self) -> &BTreeMap<String, MetadataValue> {
        &self.metadata
    }

    pub fn path_components(&self) -> &[String] {
        &self.path_components
    }

    /// Bundle directory name: the path components joined with `_`.
    pub fn bundle_name(&self) -> String {
        self.path_components.join("_")
    }
}
