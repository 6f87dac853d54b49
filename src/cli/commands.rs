use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sample-tagger")]
#[command(version = "1.0")]
#[command(about = "Read raw sample files, add tags, and write them to another directory", long_about = None)]
pub struct Cli {
    /// Directory containing the raw sample tree
    #[arg(short = 'i', long = "raw-files-directory")]
    pub raw_files_directory: PathBuf,

    /// Directory where the tagged bundles will be stored (wiped first)
    #[arg(short = 'o', long = "output-directory")]
    pub output_directory: PathBuf,

    /// Performer recorded in every bundle
    #[arg(long, default_value = "Chloe")]
    pub whose_voice: String,

    /// Person who evaluated the dimensions
    #[arg(long, default_value = "Chloe")]
    pub evaluator: String,

    /// Also write a CSV listing every bundle
    #[arg(short = 'r', long)]
    pub report: Option<PathBuf>,
}
