use std::fs;

use flight_corpus_processor::generator::{CorpusGenerator, GeneratorConfig};
use flight_corpus_processor::processors::ProcessingEngine;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn generator_config(output_dir: std::path::PathBuf, null_probability: f64) -> GeneratorConfig {
    GeneratorConfig {
        output_dir,
        file_count: 20,
        min_records_per_file: 5,
        max_records_per_file: 15,
        city_count: 8,
        null_probability,
        seed: Some(7),
    }
}

#[test]
fn test_generate_then_process_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let corpus_dir = temp_dir.path().join("flights");

    let summary = CorpusGenerator::new(generator_config(corpus_dir.clone(), 0.05))
        .generate(None)
        .unwrap();

    let report = ProcessingEngine::new()
        .process_corpus(&corpus_dir, None)
        .unwrap();

    assert_eq!(report.total_records, summary.records_written);
    assert_eq!(report.files_processed, summary.files_written as u64);
    assert_eq!(report.files_skipped, 0);
    assert!(report.dirty_records <= report.total_records);

    // Every destination in the table has sane statistics
    assert!(!report.top_destinations.is_empty());
    assert!(report.top_destinations.len() <= 25);
    for row in &report.top_destinations {
        assert!(row.clean_flights > 0);
        assert!(row.avg_duration_secs >= 3600.0 && row.avg_duration_secs <= 7200.0);
        assert!(row.p95_duration_secs >= 3600.0 && row.p95_duration_secs <= 7200.0);
    }

    // Rows are sorted by descending frequency, name-ascending on ties
    for pair in report.top_destinations.windows(2) {
        assert!(
            pair[0].clean_flights > pair[1].clean_flights
                || (pair[0].clean_flights == pair[1].clean_flights
                    && pair[0].destination_city < pair[1].destination_city)
        );
    }

    assert!(report.max_arrivals.is_some());
    assert!(report.max_departures.is_some());
}

#[test]
fn test_all_dirty_corpus_has_no_aggregates() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let corpus_dir = temp_dir.path().join("flights");

    CorpusGenerator::new(generator_config(corpus_dir.clone(), 1.0))
        .generate(None)
        .unwrap();

    let report = ProcessingEngine::new()
        .process_corpus(&corpus_dir, None)
        .unwrap();

    assert_eq!(report.dirty_records, report.total_records);
    assert!(report.top_destinations.is_empty());

    // Cities from dirty records still hold zero-sum entries and one of them
    // wins the degenerate max selection
    let arrivals = report.max_arrivals.expect("cities were observed");
    assert_eq!(arrivals.total_passengers, 0);
}

#[test]
fn test_reprocessing_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let corpus_dir = temp_dir.path().join("flights");

    CorpusGenerator::new(generator_config(corpus_dir.clone(), 0.1))
        .generate(None)
        .unwrap();

    let engine = ProcessingEngine::new();
    let first = engine.process_corpus(&corpus_dir, None).unwrap();
    let second = engine.process_corpus(&corpus_dir, None).unwrap();

    assert_eq!(first.total_records, second.total_records);
    assert_eq!(first.dirty_records, second.dirty_records);
    assert_eq!(first.top_destinations, second.top_destinations);
    assert_eq!(first.max_arrivals, second.max_arrivals);
    assert_eq!(first.max_departures, second.max_departures);
}

#[test]
fn test_malformed_file_among_valid_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let corpus_dir = temp_dir.path().join("flights");

    CorpusGenerator::new(generator_config(corpus_dir.clone(), 0.0))
        .generate(None)
        .unwrap();

    let baseline = ProcessingEngine::new()
        .process_corpus(&corpus_dir, None)
        .unwrap();

    fs::write(corpus_dir.join("zz-broken.json"), "{ not json").unwrap();

    let report = ProcessingEngine::new()
        .process_corpus(&corpus_dir, None)
        .unwrap();

    // The broken file changes nothing except one skip and one warning
    assert_eq!(report.total_records, baseline.total_records);
    assert_eq!(report.dirty_records, baseline.dirty_records);
    assert_eq!(report.files_processed, baseline.files_processed);
    assert_eq!(report.files_skipped, 1);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("zz-broken.json"));
}

#[test]
fn test_report_output_contract() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let corpus_dir = temp_dir.path().join("flights");

    CorpusGenerator::new(generator_config(corpus_dir.clone(), 0.0))
        .generate(None)
        .unwrap();

    let report = ProcessingEngine::new()
        .process_corpus(&corpus_dir, None)
        .unwrap();
    let summary = report.summary();

    assert!(summary.contains("Total records processed:"));
    assert!(summary.contains("Dirty records:"));
    assert!(summary.contains("Run duration:"));
    assert!(summary.contains("destination cities"));
    assert!(summary.contains("most passengers arrived:"));
    assert!(summary.contains("most passengers left:"));
}
