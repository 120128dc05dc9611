use std::path::Path;

use serde_json::Value;

use crate::error::{ProcessingError, Result};
use crate::models::{FlightRecord, RawFlightRecord};

/// Outcome of classifying one array element.
#[derive(Debug, Clone)]
pub enum ParsedRecord {
    Clean(FlightRecord),
    /// At least one field null or missing. Cities are kept so they can be
    /// registered with zero passenger sums.
    Dirty {
        origin_city: Option<String>,
        destination_city: Option<String>,
    },
    /// Element was not a valid flight object; counted as one dirty record
    /// rather than failing the whole file.
    Malformed,
}

pub struct RecordParser;

impl RecordParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one file's bytes as a JSON array of flight records and classify
    /// each element. A file whose top level is not a JSON array is malformed
    /// as a whole and contributes no records.
    pub fn parse_file(&self, path: &Path, bytes: &[u8]) -> Result<Vec<ParsedRecord>> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|err| ProcessingError::MalformedFile {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;

        let Value::Array(elements) = value else {
            return Err(ProcessingError::MalformedFile {
                path: path.to_path_buf(),
                message: "top-level JSON is not an array".to_string(),
            });
        };

        Ok(elements.into_iter().map(classify_element).collect())
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_element(element: Value) -> ParsedRecord {
    if !element.is_object() {
        return ParsedRecord::Malformed;
    }

    // Type-invalid field values (wrong JSON type, negative counts, bad dates)
    // fail deserialization and classify the element as malformed
    match serde_json::from_value::<RawFlightRecord>(element) {
        Ok(raw) => {
            if raw.is_clean() {
                match raw.into_clean() {
                    Some(record) => ParsedRecord::Clean(record),
                    None => ParsedRecord::Malformed,
                }
            } else {
                ParsedRecord::Dirty {
                    origin_city: raw.origin_city,
                    destination_city: raw.destination_city,
                }
            }
        }
        Err(_) => ParsedRecord::Malformed,
    }
}
