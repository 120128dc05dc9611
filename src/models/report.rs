use std::time::Duration;

/// One row of the top-destinations table.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationRow {
    pub destination_city: String,
    pub clean_flights: u64,
    pub avg_duration_secs: f64,
    pub p95_duration_secs: f64,
}

/// Cumulative passenger total for a single city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityPassengerTotal {
    pub city: String,
    pub total_passengers: u64,
}

/// Read-only snapshot derived from a finalized aggregation pass.
#[derive(Debug, Clone)]
pub struct Report {
    pub total_records: u64,
    pub dirty_records: u64,
    /// Array elements that were not valid flight objects; a subset of
    /// `dirty_records`.
    pub malformed_records: u64,
    pub files_processed: u64,
    pub files_skipped: u64,
    pub run_duration: Duration,
    /// Top destinations by clean-record frequency, ties broken by city name.
    pub top_destinations: Vec<DestinationRow>,
    pub max_arrivals: Option<CityPassengerTotal>,
    pub max_departures: Option<CityPassengerTotal>,
    pub warnings: Vec<String>,
}

impl Report {
    pub fn run_duration_seconds(&self) -> f64 {
        self.run_duration.as_secs_f64()
    }

    /// Render the report in the textual output format.
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Flight Corpus Report ===\n");
        summary.push_str(&format!("Total records processed: {}\n", self.total_records));
        summary.push_str(&format!("Dirty records: {}\n", self.dirty_records));
        if self.malformed_records > 0 {
            summary.push_str(&format!(
                "Malformed records (counted as dirty): {}\n",
                self.malformed_records
            ));
        }
        summary.push_str(&format!(
            "Files processed: {} ({} skipped)\n",
            self.files_processed, self.files_skipped
        ));
        summary.push_str(&format!(
            "Run duration: {:.2} seconds\n",
            self.run_duration_seconds()
        ));

        summary.push_str(&format!(
            "\nAVG and P95 of flight duration for top {} destination cities:\n",
            self.top_destinations.len()
        ));
        summary.push_str(&format!(
            "{:<20} {:>10} {:>16} {:>16}\n",
            "Destination City", "Flights", "Avg (secs)", "P95 (secs)"
        ));
        for row in &self.top_destinations {
            summary.push_str(&format!(
                "{:<20} {:>10} {:>16.2} {:>16.2}\n",
                row.destination_city, row.clean_flights, row.avg_duration_secs, row.p95_duration_secs
            ));
        }

        match &self.max_arrivals {
            Some(total) => summary.push_str(&format!(
                "\nCity with most passengers arrived: {} ({})\n",
                total.city, total.total_passengers
            )),
            None => summary.push_str("\nCity with most passengers arrived: n/a\n"),
        }
        match &self.max_departures {
            Some(total) => summary.push_str(&format!(
                "City with most passengers left: {} ({})\n",
                total.city, total.total_passengers
            )),
            None => summary.push_str("City with most passengers left: n/a\n"),
        }

        if !self.warnings.is_empty() {
            summary.push_str(&format!("\nWarnings: {}\n", self.warnings.len()));
            for warning in &self.warnings {
                summary.push_str(&format!("  - {}\n", warning));
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_contains_required_sections() {
        let report = Report {
            total_records: 4,
            dirty_records: 1,
            malformed_records: 0,
            files_processed: 2,
            files_skipped: 0,
            run_duration: Duration::from_millis(1234),
            top_destinations: vec![DestinationRow {
                destination_city: "city_1".to_string(),
                clean_flights: 3,
                avg_duration_secs: 3700.0,
                p95_duration_secs: 3790.0,
            }],
            max_arrivals: Some(CityPassengerTotal {
                city: "city_1".to_string(),
                total_passengers: 300,
            }),
            max_departures: Some(CityPassengerTotal {
                city: "city_0".to_string(),
                total_passengers: 300,
            }),
            warnings: vec!["skipping bad.json: not an array".to_string()],
        };

        let summary = report.summary();
        assert!(summary.contains("Total records processed: 4"));
        assert!(summary.contains("Dirty records: 1"));
        assert!(summary.contains("Run duration: 1.23 seconds"));
        assert!(summary.contains("city_1"));
        assert!(summary.contains("most passengers arrived: city_1 (300)"));
        assert!(summary.contains("most passengers left: city_0 (300)"));
        assert!(summary.contains("Warnings: 1"));
    }
}
