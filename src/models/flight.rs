use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One flight observation as it appears on disk. Every field is independently
/// nullable; a missing key is treated the same as an explicit null.
/// Unrecognized keys are tolerated and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFlightRecord {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub origin_city: Option<String>,
    #[serde(default)]
    pub destination_city: Option<String>,
    #[serde(default)]
    pub flight_duration_secs: Option<u32>,
    #[serde(default)]
    pub num_passengers: Option<u32>,
}

impl RawFlightRecord {
    /// A record is clean iff all five fields are present and non-null.
    pub fn is_clean(&self) -> bool {
        self.date.is_some()
            && self.origin_city.is_some()
            && self.destination_city.is_some()
            && self.flight_duration_secs.is_some()
            && self.num_passengers.is_some()
    }

    /// Project into the clean representation, or `None` for a dirty record.
    pub fn into_clean(self) -> Option<FlightRecord> {
        Some(FlightRecord {
            date: self.date?,
            origin_city: self.origin_city?,
            destination_city: self.destination_city?,
            flight_duration_secs: self.flight_duration_secs?,
            num_passengers: self.num_passengers?,
        })
    }
}

/// A fully populated flight record. Only clean records reach the aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRecord {
    pub date: NaiveDate,
    pub origin_city: String,
    pub destination_city: String,
    pub flight_duration_secs: u32,
    pub num_passengers: u32,
}
