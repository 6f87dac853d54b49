use clap::Parser;
use sample_tagger::cli::commands::Cli;
use sample_tagger::pipeline::classifier::SubdirKind;
use sample_tagger::utils::reporting::Reporter;
use sample_tagger::{FilenameDecoder, LocalFileSystem, Provenance, Tagger};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    println!("=== Starting Sample Tagging ===");
    println!("Raw files directory: {}", cli.raw_files_directory.display());
    println!("Output directory: {}", cli.output_directory.display());

    let provenance = Provenance {
        whose_voice_is_it: cli.whose_voice,
        who_evaluated_the_dimensions: cli.evaluator,
        ..Provenance::default()
    };
    let tagger = Tagger::with_parts(LocalFileSystem::new(), FilenameDecoder::default(), provenance);

    let summary = match tagger.run(&cli.raw_files_directory, &cli.output_directory) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error tagging samples: {}", e);
            std::process::exit(1);
        }
    };

    println!("\nWrote {} bundles", summary.bundles.len());
    println!("  Single-dimension samples: {}", summary.count(|k| matches!(k, SubdirKind::SingleDimension(_))));
    println!("  Combo samples: {}", summary.count(|k| *k == SubdirKind::MultiDimension));

    if let Some(report_path) = &cli.report {
        println!("\nGenerating report...");
        match Reporter::new().write_run_report(&summary, report_path) {
            Ok(_) => println!("Report saved to: {}", report_path.display()),
            Err(e) => {
                eprintln!("Error generating report: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("\n=== Sample Tagging Complete ===");
}
