use std::path::PathBuf;

pub mod cli;
pub mod pipeline;
pub mod tagging;
pub mod utils;

#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("The raw files directory {} does not exist or is not a directory", .0.display())]
    InvalidInputPath(PathBuf),
    #[error("Output directory {} overlaps the raw files directory {}", .output.display(), .raw.display())]
    InvalidOutputPath { output: PathBuf, raw: PathBuf },
    #[error("Unexpected file in {level} raw input files directory: {}", .path.display())]
    UnexpectedFile { level: &'static str, path: PathBuf },
    #[error("Unrecognized subdir name: {name} ({})", .path.display())]
    UnrecognizedSubdir { name: String, path: PathBuf },
    #[error("Unrecognized sample filename: {filename}. looking for {pattern}")]
    UnrecognizedFilename { filename: String, pattern: String },
    #[error("Unrecognized {dimension} term: {term}")]
    UnrecognizedTerm { dimension: String, term: String },
    #[error("Unrecognized dimension level: {0}")]
    UnrecognizedLevel(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TaggerError>;

// Re-exports for convenience
pub use pipeline::bundle::{BundleMaterializer, BundleRecord};
pub use pipeline::context::{ContextDelta, MetadataContext, MetadataValue, Provenance};
pub use pipeline::traversal::{RunSummary, Tagger};
pub use tagging::decoder::FilenameDecoder;
pub use tagging::dimension::Dimension;
pub use tagging::levels::LevelQuantizer;
pub use tagging::terms::TermMapper;
pub use utils::file_ops::{FileSystem, LocalFileSystem};
