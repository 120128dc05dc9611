//! Synthetic corpus generation: materializes the on-disk input contract the
//! processing phase consumes. File names carry a timestamp and a city name
//! but convey no semantics to the analysis phase.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use tracing::info;
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::utils::progress::ProgressReporter;
use crate::utils::{
    DEFAULT_CITY_COUNT, DEFAULT_CORPUS_DIR, DEFAULT_FILE_COUNT, DEFAULT_MAX_RECORDS_PER_FILE,
    DEFAULT_MIN_RECORDS_PER_FILE, DEFAULT_NULL_PROBABILITY, MAX_FLIGHT_DURATION_SECS,
    MAX_PASSENGERS, MIN_FLIGHT_DURATION_SECS, MIN_PASSENGERS,
};

const RECORD_FIELDS: [&str; 5] = [
    "date",
    "origin_city",
    "destination_city",
    "flight_duration_secs",
    "num_passengers",
];

#[derive(Debug, Clone, Validate)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,

    #[validate(range(min = 1))]
    pub file_count: usize,

    #[validate(range(min = 1))]
    pub min_records_per_file: usize,

    #[validate(range(min = 1))]
    pub max_records_per_file: usize,

    #[validate(range(min = 1))]
    pub city_count: usize,

    #[validate(range(min = 0.0, max = 1.0))]
    pub null_probability: f64,

    /// Fixed RNG seed for reproducible corpora
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            file_count: DEFAULT_FILE_COUNT,
            min_records_per_file: DEFAULT_MIN_RECORDS_PER_FILE,
            max_records_per_file: DEFAULT_MAX_RECORDS_PER_FILE,
            city_count: DEFAULT_CITY_COUNT,
            null_probability: DEFAULT_NULL_PROBABILITY,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    fn check(&self) -> Result<()> {
        self.validate()?;
        if self.min_records_per_file > self.max_records_per_file {
            return Err(ProcessingError::Config(format!(
                "min records per file ({}) exceeds max ({})",
                self.min_records_per_file, self.max_records_per_file
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub output_dir: PathBuf,
    pub files_written: usize,
    pub records_written: u64,
}

pub struct CorpusGenerator {
    config: GeneratorConfig,
}

impl CorpusGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Recreate the output directory and fill it with randomized flight
    /// record files. A pre-existing directory is removed first, matching the
    /// clean-slate behavior the processing phase expects.
    pub fn generate(&self, progress: Option<&ProgressReporter>) -> Result<GenerationSummary> {
        self.config.check()?;

        if self.config.output_dir.exists() {
            fs::remove_dir_all(&self.config.output_dir)?;
        }
        fs::create_dir_all(&self.config.output_dir)?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let cities: Vec<String> = (0..self.config.city_count)
            .map(|i| format!("city_{i}"))
            .collect();

        let mut records_written = 0u64;
        for file_index in 0..self.config.file_count {
            let record_count =
                rng.gen_range(self.config.min_records_per_file..=self.config.max_records_per_file);
            let records: Vec<Value> = (0..record_count)
                .map(|_| self.generate_record(&mut rng, &cities))
                .collect();
            records_written += records.len() as u64;

            // Timestamp plus file index keeps names unique within a run
            let stamp = Local::now().format("%m-%y-%H-%M-%S-%6f");
            let city = &cities[rng.gen_range(0..cities.len())];
            let filename = format!("{stamp}-{file_index:05}-{city}-flights.json");

            fs::write(
                self.config.output_dir.join(filename),
                serde_json::to_vec(&records)?,
            )?;

            if let Some(progress) = progress {
                progress.increment(1);
            }
        }

        info!(
            files = self.config.file_count,
            records = records_written,
            dir = %self.config.output_dir.display(),
            "corpus generation finished"
        );

        Ok(GenerationSummary {
            output_dir: self.config.output_dir.clone(),
            files_written: self.config.file_count,
            records_written,
        })
    }

    fn generate_record(&self, rng: &mut StdRng, cities: &[String]) -> Value {
        let mut record = json!({
            "date": Local::now().date_naive(),
            "origin_city": cities[rng.gen_range(0..cities.len())],
            "destination_city": cities[rng.gen_range(0..cities.len())],
            "flight_duration_secs": rng.gen_range(MIN_FLIGHT_DURATION_SECS..=MAX_FLIGHT_DURATION_SECS),
            "num_passengers": rng.gen_range(MIN_PASSENGERS..=MAX_PASSENGERS),
        });

        if rng.gen::<f64>() < self.config.null_probability {
            let field = RECORD_FIELDS[rng.gen_range(0..RECORD_FIELDS.len())];
            record[field] = Value::Null;
        }

        record
    }
}
