pub mod flight;
pub mod report;

pub use flight::{FlightRecord, RawFlightRecord};
pub use report::{CityPassengerTotal, DestinationRow, Report};
