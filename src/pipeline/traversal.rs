use std::path::{Path, PathBuf};
use log::{debug, info};
use crate::pipeline::bundle::{BundleMaterializer, BundleRecord};
use crate::pipeline::classifier::{classify, SubdirKind};
use crate::pipeline::context::{ContextDelta, MetadataContext, Provenance, CONTENT_DESCRIPTOR_KEY};
use crate::tagging::decoder::FilenameDecoder;
use crate::utils::file_ops::{DirEntry, FileSystem};
use crate::{Result, TaggerError};

/// Bundles produced by one run, in the order they were written.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub bundles: Vec<BundleRecord>,
}

impl RunSummary {
    pub fn count(&self, kind_matches: impl Fn(&SubdirKind) -> bool) -> usize {
        self.bundles.iter().filter(|b| kind_matches(&b.kind)).count()
    }
}

/// Walks a raw sample tree and turns every sample into an output bundle.
///
/// Expected layout:
///
/// ```text
/// <raw>/<content_descriptor>/<Pitch|Resonance|Weight>/.../<Term> <Dimension>.wav
/// <raw>/<content_descriptor>/Combos/.../<Pitch>-<Resonance>-<Weight>.wav
/// ```
///
/// Any deviation aborts the run. Entries are visited in file-name order.
pub struct Tagger<F: FileSystem> {
    fs: F,
    decoder: FilenameDecoder,
    provenance: Provenance,
}

impl<F: FileSystem> Tagger<F> {
    pub fn new(fs: F) -> Self {
        Self::with_parts(fs, FilenameDecoder::default(), Provenance::default())
    }

    pub fn with_parts(fs: F, decoder: FilenameDecoder, provenance: Provenance) -> Self {
        Self { fs, decoder, provenance }
    }

    /// Wipes `output_root`, then tags everything under `raw_root` into it.
    pub fn run(&self, raw_root: &Path, output_root: &Path) -> Result<RunSummary> {
        if !self.fs.is_dir(raw_root) {
            return Err(TaggerError::InvalidInputPath(raw_root.to_path_buf()));
        }
        check_output_location(raw_root, output_root)?;

        if self.fs.exists(output_root) {
            info!("Removing previous output at {}", output_root.display());
            self.fs.remove_dir_all(output_root)?;
        }
        self.fs.create_dir_all(output_root)?;

        let mut walk = Walk {
            fs: &self.fs,
            decoder: &self.decoder,
            materializer: BundleMaterializer::new(output_root),
            summary: RunSummary::default(),
        };
        info!("Tagging samples from {}", raw_root.display());
        walk.root(raw_root, &MetadataContext::root(&self.provenance))?;

        info!("Wrote {} bundles to {}", walk.summary.bundles.len(), output_root.display());
        Ok(walk.summary)
    }
}

/// State for a single run.
struct Walk<'a, F: FileSystem> {
    fs: &'a F,
    decoder: &'a FilenameDecoder,
    materializer: BundleMaterializer,
    summary: RunSummary,
}

impl<F: FileSystem> Walk<'_, F> {
    fn visible_entries(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = self.fs.list_dir(dir)?;
        entries.retain(|entry| {
            if entry.is_hidden() {
                debug!("Skipping hidden entry {}", entry.path.display());
            }
            !entry.is_hidden()
        });
        Ok(entries)
    }

    fn root(&mut self, dir: &Path, context: &MetadataContext) -> Result<()> {
        for entry in self.visible_entries(dir)? {
            if !entry.is_dir {
                return Err(TaggerError::UnexpectedFile { level: "top-level", path: entry.path });
            }

            let context = context.derive(
                ContextDelta::new()
                    .value(CONTENT_DESCRIPTOR_KEY, entry.name.as_str())
                    .component(entry.name.as_str()),
            );
            self.content(&entry.path, &context)?;
        }
        Ok(())
    }

    fn content(&mut self, dir: &Path, context: &MetadataContext) -> Result<()> {
        for entry in self.visible_entries(dir)? {
            if !entry.is_dir {
                return Err(TaggerError::UnexpectedFile { level: "second-level", path: entry.path });
            }

            let kind = classify(&entry.name, &entry.path)?;
            debug!("Classified {} as {:?}", entry.path.display(), kind);

            let context = match kind {
                SubdirKind::SingleDimension(dimension) => context.derive(
                    dimension
                        .others()
                        .fold(ContextDelta::new(), |delta, other| delta.unlabeled(other)),
                ),
                SubdirKind::MultiDimension => context.clone(),
            };
            self.samples(&entry.path, kind, &context)?;
        }
        Ok(())
    }

    // Nested directories below a dimension or Combos directory are only for
    // organisation; they change neither the grammar nor the bundle name.
    fn samples(&mut self, dir: &Path, kind: SubdirKind, context: &MetadataContext) -> Result<()> {
        for entry in self.visible_entries(dir)? {
            if entry.is_dir {
                self.samples(&entry.path, kind, context)?;
            } else {
                self.sample(entry, kind, context)?;
            }
        }
        Ok(())
    }

    fn sample(&mut self, entry: DirEntry, kind: SubdirKind, context: &MetadataContext) -> Result<()> {
        let levels = match kind {
            SubdirKind::SingleDimension(dimension) => self.decoder.decode_single(&entry.name, dimension)?,
            SubdirKind::MultiDimension => self.decoder.decode_combo(&entry.name)?,
        };

        let stem = Path::new(&entry.name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| entry.name.clone());
        let context = context.derive(ContextDelta::new().levels(&levels).component(stem));

        let directory = self.materializer.materialize(self.fs, &entry.path, &context)?;
        self.summary.bundles.push(BundleRecord {
            directory,
            source: entry.path,
            kind,
            metadata: context.metadata().clone(),
        });
        Ok(())
    }
}

/// Rejects output roots that would wipe, or be re-read as, raw input.
fn check_output_location(raw_root: &Path, output_root: &Path) -> Result<()> {
    let raw = resolve(raw_root);
    let output = resolve(output_root);
    if output.starts_with(&raw) || raw.starts_with(&output) {
        return Err(TaggerError::InvalidOutputPath {
            output: output_root.to_path_buf(),
            raw: raw_root.to_path_buf(),
        });
    }
    Ok(())
}

// Best-effort absolute form of a path that may not exist yet.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => resolve(parent).join(name),
        _ => std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf()),
    }
}
