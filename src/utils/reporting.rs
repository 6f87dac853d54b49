use std::path::Path;
use csv::Writer;
use log::info;
use crate::pipeline::context::CONTENT_DESCRIPTOR_KEY;
use crate::pipeline::traversal::RunSummary;
use crate::tagging::dimension::Dimension;
use crate::Result;

pub struct Reporter;

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// One CSV row per bundle written in the run.
    pub fn write_run_report(&self, summary: &RunSummary, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path_ref = output_path.as_ref();
        let mut writer = Writer::from_path(output_path_ref)?;

        let mut header = vec!["Bundle", "Source", "Grammar", CONTENT_DESCRIPTOR_KEY];
        header.extend(Dimension::ALL.iter().map(|d| d.as_str()));
        writer.write_record(&header)?;

        for bundle in &summary.bundles {
            let mut record = vec![
                bundle.directory.display().to_string(),
                bundle.source.display().to_string(),
                bundle.kind.as_str().to_string(),
            ];
            let keys = std::iter::once(CONTENT_DESCRIPTOR_KEY).chain(Dimension::ALL.iter().map(|d| d.as_str()));
            for key in keys {
                record.push(bundle.metadata.get(key).map_or_else(String::new, |v| v.to_string()));
            }
            writer.write_record(&record)?;
        }

        writer.flush()?;
        info!("Run report generated: {}", output_path_ref.display());
        Ok(())
    }
}
