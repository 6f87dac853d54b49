use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::info;
use crate::pipeline::classifier::SubdirKind;
use crate::pipeline::context::{MetadataContext, MetadataValue};
use crate::utils::file_ops::FileSystem;
use crate::Result;

pub const SAMPLE_FILE_NAME: &str = "sample.wav";
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// One bundle written during a run.
#[derive(Debug, Clone)]
pub struct BundleRecord {
    pub directory: PathBuf,
    pub source: PathBuf,
    pub kind: SubdirKind,
    pub metadata: BTreeMap<String, MetadataValue>,
}

/// Writes bundles (a sample copy plus its metadata sidecar) into the output root.
pub struct BundleMaterializer {
    output_root: PathBuf,
}

impl BundleMaterializer {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Creates a fresh bundle directory for `source` and returns its path.
    ///
    /// The directory is named from the context's path components; if that
    /// name is taken, `_1`, `_2`, ... are tried in turn. Existing bundles are
    /// never written into.
    pub fn materialize<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        source: &Path,
        context: &MetadataContext,
    ) -> Result<PathBuf> {
        let directory = self.claim_directory(fs, &context.bundle_name())?;

        fs.copy_file(source, &directory.join(SAMPLE_FILE_NAME))?;
        let document = serde_json::to_vec_pretty(context.metadata())?;
        fs.write_file(&directory.join(METADATA_FILE_NAME), &document)?;

        info!("Wrote bundle {} from {}", directory.display(), source.display());
        Ok(directory)
    }

    // Check-and-create is one create_dir call, so a taken name is never reused.
    fn claim_directory<F: FileSystem + ?Sized>(&self, fs: &F, name: &str) -> Result<PathBuf> {
        let base = self.output_root.join(name);
        match fs.create_dir(&base) {
            Ok(()) => return Ok(base),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e.into()),
        }

        let mut counter = 1;
        loop {
            let candidate = self.output_root.join(format!("{}_{}", name, counter));
            match fs.create_dir(&candidate) {
                Ok(()) => return Ok(candidate),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => counter += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::context::ContextDelta;
    use crate::utils::file_ops::LocalFileSystem;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn context(components: &[&str]) -> MetadataContext {
        components
            .iter()
            .fold(MetadataContext::default(), |ctx, c| ctx.derive(ContextDelta::new().component(*c)))
            .derive(ContextDelta::new().value("content_descriptor", components[0]).value("Pitch", 70u32))
    }

    #[test]
    fn test_materialize_writes_sample_and_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("High Pitch.wav");
        fs::write(&source, b"RIFF-data").unwrap();
        let output = temp_dir.path().join("out");
        fs::create_dir(&output).unwrap();

        let materializer = BundleMaterializer::new(&output);
        let dir = materializer
            .materialize(&LocalFileSystem::new(), &source, &context(&["voiceA", "High Pitch"]))
            .unwrap();

        assert_eq!(dir, output.join("voiceA_High Pitch"));
        assert_eq!(fs::read(dir.join(SAMPLE_FILE_NAME)).unwrap(), b"RIFF-data");

        let metadata: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.join(METADATA_FILE_NAME)).unwrap()).unwrap();
        assert_eq!(
            metadata,
            serde_json::json!({"content_descriptor": "voiceA", "Pitch": 70})
        );
    }

    #[test]
    fn test_collisions_get_sequential_suffixes() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("Low Pitch.wav");
        fs::write(&source, b"x").unwrap();
        let output = temp_dir.path().join("out");
        fs::create_dir(&output).unwrap();

        let materializer = BundleMaterializer::new(&output);
        let ctx = context(&["voiceA", "Low Pitch"]);
        let fs_impl = LocalFileSystem::new();

        let first = materializer.materialize(&fs_impl, &source, &ctx).unwrap();
        let second = materializer.materialize(&fs_impl, &source, &ctx).unwrap();
        let third = materializer.materialize(&fs_impl, &source, &ctx).unwrap();

        assert_eq!(first, output.join("voiceA_Low Pitch"));
        assert_eq!(second, output.join("voiceA_Low Pitch_1"));
        assert_eq!(third, output.join("voiceA_Low Pitch_2"));
    }

    #[test]
    fn test_missing_source_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let materializer = BundleMaterializer::new(temp_dir.path());
        let result = materializer.materialize(
            &LocalFileSystem::new(),
            &temp_dir.path().join("missing.wav"),
            &context(&["voiceA", "missing"]),
        );
        assert!(matches!(result, Err(crate::TaggerError::Io(_))));
    }
}
