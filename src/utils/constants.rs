/// Default corpus location, shared by the generator and the processor
pub const DEFAULT_CORPUS_DIR: &str = "tmp/flights";

/// Number of destination cities reported in the duration table
pub const TOP_DESTINATION_COUNT: usize = 25;

/// Percentile reported alongside the average duration
pub const DURATION_PERCENTILE: f64 = 0.95;

/// Generation defaults
pub const DEFAULT_FILE_COUNT: usize = 5000;
pub const DEFAULT_MIN_RECORDS_PER_FILE: usize = 50;
pub const DEFAULT_MAX_RECORDS_PER_FILE: usize = 100;
pub const DEFAULT_CITY_COUNT: usize = 150;
pub const DEFAULT_NULL_PROBABILITY: f64 = 0.001;

/// Flight value ranges (inclusive), 1-2 hour flights
pub const MIN_FLIGHT_DURATION_SECS: u32 = 3600;
pub const MAX_FLIGHT_DURATION_SECS: u32 = 7200;
pub const MIN_PASSENGERS: u32 = 50;
pub const MAX_PASSENGERS: u32 = 200;
