use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::{
    DEFAULT_CITY_COUNT, DEFAULT_CORPUS_DIR, DEFAULT_FILE_COUNT, DEFAULT_MAX_RECORDS_PER_FILE,
    DEFAULT_MIN_RECORDS_PER_FILE, DEFAULT_NULL_PROBABILITY,
};

#[derive(Parser)]
#[command(name = "flight-corpus-processor")]
#[command(about = "Flight record corpus generator and statistics processor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Suppress progress output")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a corpus of flight record files and print aggregate statistics
    Process {
        #[arg(
            short,
            long,
            default_value = DEFAULT_CORPUS_DIR,
            help = "Corpus root directory"
        )]
        input_dir: PathBuf,
    },

    /// Generate a synthetic flight record corpus on disk
    Generate {
        #[arg(
            short,
            long,
            default_value = DEFAULT_CORPUS_DIR,
            help = "Output directory (recreated if it exists)"
        )]
        output_dir: PathBuf,

        #[arg(long, default_value_t = DEFAULT_FILE_COUNT, help = "Number of files to write")]
        files: usize,

        #[arg(long, default_value_t = DEFAULT_CITY_COUNT, help = "Number of distinct cities")]
        cities: usize,

        #[arg(long, default_value_t = DEFAULT_MIN_RECORDS_PER_FILE)]
        min_records: usize,

        #[arg(long, default_value_t = DEFAULT_MAX_RECORDS_PER_FILE)]
        max_records: usize,

        #[arg(
            long,
            default_value_t = DEFAULT_NULL_PROBABILITY,
            help = "Probability that one field of a record is nulled"
        )]
        null_probability: f64,

        #[arg(long, help = "RNG seed for reproducible corpora")]
        seed: Option<u64>,
    },
}
