use std::path::Path;
use crate::tagging::dimension::Dimension;
use crate::{Result, TaggerError};

/// Name of the content-level directory holding multi-dimension samples.
pub const COMBOS_DIR: &str = "Combos";

/// How the samples beneath a content-level directory are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubdirKind {
    /// `<Term> <Dimension>.wav`; the other two dimensions are unlabeled.
    SingleDimension(Dimension),
    /// `<Pitch>-<Resonance>-<Weight>.wav`.
    MultiDimension,
}

impl SubdirKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubdirKind::SingleDimension(_) => "single",
            SubdirKind::MultiDimension => "combo",
        }
    }
}

pub fn classify(name: &str, path: &Path) -> Result<SubdirKind> {
    if name == COMBOS_DIR {
        return Ok(SubdirKind::MultiDimension);
    }
    Dimension::from_name(name)
        .map(SubdirKind::SingleDimension)
        .ok_or_else(|| TaggerError::UnrecognizedSubdir {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}
