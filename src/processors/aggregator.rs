use std::cmp::Reverse;
use std::collections::HashMap;
use std::time::Duration;

use crate::models::{CityPassengerTotal, DestinationRow, Report};
use crate::readers::ParsedRecord;
use crate::utils::stats::{mean, percentile};
use crate::utils::{DURATION_PERCENTILE, TOP_DESTINATION_COUNT};

#[derive(Debug, Default)]
struct DestinationStats {
    clean_flights: u64,
    durations: Vec<f64>,
}

/// Process-wide accumulator for the single aggregation pass.
///
/// Folding is commutative and associative over records, so the final
/// aggregates do not depend on file visit order. The full per-destination
/// duration collections are retained until finalization; exact percentiles
/// need them, and they are the dominant memory cost of a run.
#[derive(Debug, Default)]
pub struct AggregationState {
    pub total_records: u64,
    pub dirty_records: u64,
    pub malformed_records: u64,
    pub files_processed: u64,
    pub files_skipped: u64,
    destinations: HashMap<String, DestinationStats>,
    arrivals: HashMap<String, u64>,
    departures: HashMap<String, u64>,
    pub warnings: Vec<String>,
}

impl AggregationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city in both passenger sum maps with a baseline of zero.
    /// Every city ever seen as origin or destination participates in the
    /// max-arrival/max-departure selection, clean record or not.
    pub fn observe_city(&mut self, city: &str) {
        if !self.arrivals.contains_key(city) {
            self.arrivals.insert(city.to_string(), 0);
        }
        if !self.departures.contains_key(city) {
            self.departures.insert(city.to_string(), 0);
        }
    }

    /// Fold one classified record into the running aggregates.
    pub fn fold(&mut self, record: ParsedRecord) {
        self.total_records += 1;

        match record {
            ParsedRecord::Clean(flight) => {
                self.observe_city(&flight.origin_city);
                self.observe_city(&flight.destination_city);

                let stats = self
                    .destinations
                    .entry(flight.destination_city.clone())
                    .or_default();
                stats.clean_flights += 1;
                stats.durations.push(f64::from(flight.flight_duration_secs));

                let passengers = u64::from(flight.num_passengers);
                *self.arrivals.entry(flight.destination_city).or_insert(0) += passengers;
                *self.departures.entry(flight.origin_city).or_insert(0) += passengers;
            }
            ParsedRecord::Dirty {
                origin_city,
                destination_city,
            } => {
                self.dirty_records += 1;
                if let Some(city) = origin_city.as_deref() {
                    self.observe_city(city);
                }
                if let Some(city) = destination_city.as_deref() {
                    self.observe_city(city);
                }
            }
            ParsedRecord::Malformed => {
                self.dirty_records += 1;
                self.malformed_records += 1;
            }
        }
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn distinct_destinations(&self) -> usize {
        self.destinations.len()
    }

    pub fn arrival_sum(&self, city: &str) -> Option<u64> {
        self.arrivals.get(city).copied()
    }

    pub fn departure_sum(&self, city: &str) -> Option<u64> {
        self.departures.get(city).copied()
    }

    /// Consume the finalized state into a read-only report.
    pub fn finalize(self, run_duration: Duration) -> Report {
        // Rank by clean frequency descending, city name ascending on ties
        let mut ranked: Vec<(String, DestinationStats)> = self.destinations.into_iter().collect();
        ranked.sort_by(|(city_a, stats_a), (city_b, stats_b)| {
            Reverse(stats_a.clean_flights)
                .cmp(&Reverse(stats_b.clean_flights))
                .then_with(|| city_a.cmp(city_b))
        });
        ranked.truncate(TOP_DESTINATION_COUNT);

        let top_destinations = ranked
            .into_iter()
            .map(|(destination_city, mut stats)| {
                stats.durations.sort_by(f64::total_cmp);
                DestinationRow {
                    destination_city,
                    clean_flights: stats.clean_flights,
                    avg_duration_secs: mean(&stats.durations),
                    p95_duration_secs: percentile(&stats.durations, DURATION_PERCENTILE),
                }
            })
            .collect();

        Report {
            total_records: self.total_records,
            dirty_records: self.dirty_records,
            malformed_records: self.malformed_records,
            files_processed: self.files_processed,
            files_skipped: self.files_skipped,
            run_duration,
            top_destinations,
            max_arrivals: max_passenger_city(&self.arrivals),
            max_departures: max_passenger_city(&self.departures),
            warnings: self.warnings,
        }
    }
}

/// Select the city with the maximum passenger sum, ties broken by city name
/// ascending. Scans the full map, not just the top destinations.
fn max_passenger_city(sums: &HashMap<String, u64>) -> Option<CityPassengerTotal> {
    let mut best: Option<(&String, u64)> = None;
    for (city, &total) in sums {
        best = match best {
            None => Some((city, total)),
            Some((best_city, best_total)) => {
                if total > best_total || (total == best_total && city < best_city) {
                    Some((city, total))
                } else {
                    Some((best_city, best_total))
                }
            }
        };
    }
    best.map(|(city, total_passengers)| CityPassengerTotal {
        city: city.clone(),
        total_passengers,
    })
}
