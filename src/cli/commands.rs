use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::generator::{CorpusGenerator, GeneratorConfig};
use crate::processors::ProcessingEngine;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Process { input_dir } => {
            println!("Processing flight corpus...");
            println!("Input directory: {}", input_dir.display());

            let progress = ProgressReporter::new_spinner("Processing corpus...", cli.quiet);

            let engine = ProcessingEngine::new();
            let report = engine.process_corpus(&input_dir, Some(&progress))?;

            progress.finish_with_message(&format!(
                "Processed {} files ({} skipped)",
                report.files_processed, report.files_skipped
            ));

            println!("\n{}", report.summary());
        }

        Commands::Generate {
            output_dir,
            files,
            cities,
            min_records,
            max_records,
            null_probability,
            seed,
        } => {
            println!("Generating flight corpus...");
            println!("Output directory: {}", output_dir.display());
            println!(
                "Files: {}, Cities: {}, Records/file: {}-{}, Null probability: {}",
                files, cities, min_records, max_records, null_probability
            );

            let config = GeneratorConfig {
                output_dir,
                file_count: files,
                min_records_per_file: min_records,
                max_records_per_file: max_records,
                city_count: cities,
                null_probability,
                seed,
            };

            let progress = ProgressReporter::new(files as u64, "Generating files...", cli.quiet);

            let generator = CorpusGenerator::new(config);
            let summary = generator.generate(Some(&progress))?;

            progress.finish_with_message("Generation complete");
            println!(
                "Wrote {} records across {} files to {}",
                summary.records_written,
                summary.files_written,
                summary.output_dir.display()
            );
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: harmless if a subscriber is already installed (tests)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}
