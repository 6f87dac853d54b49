use std::collections::{BTreeMap, HashMap};
use log::debug;
use regex::Regex;
use crate::tagging::dimension::Dimension;
use crate::tagging::levels::LevelQuantizer;
use crate::tagging::terms::TermMapper;
use crate::{Result, TaggerError};

/// Decoded dimension scores for one sample.
pub type DimensionLevels = BTreeMap<Dimension, u32>;

const COMBO_PATTERN: &str = r"^(?P<Pitch>\w+)-(?P<Resonance>\w+)-(?P<Weight>\w+)\.wav$";

/// Extracts dimension scores from sample filenames.
///
/// Two grammars are supported and the caller picks one based on where the
/// file sits in the raw tree:
///
/// * single-dimension: `<Term> <Dimension>.wav`, e.g. `High Pitch.wav`
/// * combo: `<Pitch>-<Resonance>-<Weight>.wav`, e.g. `High-Dark-Thin.wav`
pub struct FilenameDecoder {
    terms: TermMapper,
    quantizer: LevelQuantizer,
    single_patterns: HashMap<Dimension, Regex>,
    combo_pattern: Regex,
}

impl Default for FilenameDecoder {
    fn default() -> Self {
        Self::new(TermMapper::default(), LevelQuantizer::default())
    }
}

impl FilenameDecoder {
    pub fn new(terms: TermMapper, quantizer: LevelQuantizer) -> Self {
        let single_patterns = Dimension::ALL
            .into_iter()
            .map(|dim| (dim, Self::single_pattern(dim)))
            .collect();

        Self {
            terms,
            quantizer,
            single_patterns,
            // Both patterns are built from constants and always compile
            combo_pattern: Regex::new(COMBO_PATTERN).expect("combo pattern is valid"),
        }
    }

    fn single_pattern(dimension: Dimension) -> Regex {
        let pattern = format!(r"^(\w+) {}\.wav$", regex::escape(dimension.as_str()));
        Regex::new(&pattern).expect("single-dimension pattern is valid")
    }

    fn score(&self, dimension: Dimension, term: &str) -> Result<u32> {
        let level = self.terms.canonicalize(dimension, term)?;
        self.quantizer.quantize(level)
    }

    /// Decodes `<Term> <Dimension>.wav` into exactly one entry.
    pub fn decode_single(&self, filename: &str, dimension: Dimension) -> Result<DimensionLevels> {
        let pattern = &self.single_patterns[&dimension];
        let captures = pattern.captures(filename).ok_or_else(|| TaggerError::UnrecognizedFilename {
            filename: filename.to_string(),
            pattern: pattern.as_str().to_string(),
        })?;

        let term = &captures[1];
        let score = self.score(dimension, term)?;
        debug!("Decoded '{}' as {} {} ({})", filename, dimension, term, score);

        Ok(BTreeMap::from([(dimension, score)]))
    }

    /// Decodes `<Pitch>-<Resonance>-<Weight>.wav` into all three entries.
    pub fn decode_combo(&self, filename: &str) -> Result<DimensionLevels> {
        let captures = self.combo_pattern.captures(filename).ok_or_else(|| {
            TaggerError::UnrecognizedFilename {
                filename: filename.to_string(),
                pattern: COMBO_PATTERN.to_string(),
            }
        })?;

        let mut levels = DimensionLevels::new();
        for dimension in Dimension::ALL {
            let term = &captures[dimension.as_str()];
            levels.insert(dimension, self.score(dimension, term)?);
        }
        debug!("Decoded combo '{}' as {:?}", filename, levels);

        Ok(levels)
    }
}
