use std::collections::HashMap;
use crate::{Result, TaggerError};

pub const HIGHER: &str = "Higher";
pub const MEDIUM: &str = "Medium";
pub const LOWER: &str = "Lower";

/// Maps canonical level names onto the shared numeric scale.
#[derive(Debug, Clone)]
pub struct LevelQuantizer {
    scores: HashMap<String, u32>,
}

impl Default for LevelQuantizer {
    fn default() -> Self {
        Self::from_table([(HIGHER, 70), (MEDIUM, 50), (LOWER, 30)])
    }
}

impl LevelQuantizer {
    pub fn from_table<I, S>(table: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            scores: table.into_iter().map(|(name, score)| (name.into(), score)).collect(),
        }
    }

    pub fn quantize(&self, level_name: &str) -> Result<u32> {
        self.scores
            .get(level_name)
            .copied()
            .ok_or_else(|| TaggerError::UnrecognizedLevel(level_name.to_string()))
    }
}
