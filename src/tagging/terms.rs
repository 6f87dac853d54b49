use std::collections::HashMap;
use crate::tagging::dimension::Dimension;
use crate::tagging::levels::{HIGHER, LOWER, MEDIUM};
use crate::{Result, TaggerError};

/// Per-dimension vocabulary of descriptive terms, each mapped to a canonical level name.
///
/// Lookups are always scoped to one dimension, so the same term may appear
/// in several vocabularies without conflict.
#[derive(Debug, Clone)]
pub struct TermMapper {
    vocabularies: HashMap<Dimension, HashMap<String, String>>,
}

impl Default for TermMapper {
    fn default() -> Self {
        Self::new()
            .with_vocabulary(Dimension::Pitch, [("High", HIGHER), ("Medium", MEDIUM), ("Low", LOWER)])
            .with_vocabulary(Dimension::Resonance, [("Bright", HIGHER), ("Neutral", MEDIUM), ("Dark", LOWER)])
            .with_vocabulary(Dimension::Weight, [("Thin", LOWER), ("Thick", MEDIUM), ("Thicker", HIGHER)])
    }
}

impl TermMapper {
    /// An empty mapper. Every lookup fails until vocabularies are added.
    pub fn new() -> Self {
        Self { vocabularies: HashMap::new() }
    }

    /// Replaces the vocabulary of `dimension`.
    pub fn with_vocabulary<I, T, L>(mut self, dimension: Dimension, table: I) -> Self
    where
        I: IntoIterator<Item = (T, L)>,
        T: Into<String>,
        L: Into<String>,
    {
        let table = table.into_iter().map(|(term, level)| (term.into(), level.into())).collect();
        self.vocabularies.insert(dimension, table);
        self
    }

    pub fn canonicalize(&self, dimension: Dimension, term: &str) -> Result<&str> {
        self.vocabularies
            .get(&dimension)
            .and_then(|table| table.get(term))
            .map(String::as_str)
            .ok_or_else(|| TaggerError::UnrecognizedTerm {
                dimension: dimension.to_string(),
                term: term.to_string(),
            })
    }

    /// Terms known for `dimension`, sorted.
    pub fn terms(&self, dimension: Dimension) -> Vec<&str> {
        let mut terms: Vec<&str> = self
            .vocabularies
            .get(&dimension)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        terms.sort_unstable();
        terms
    }
}
