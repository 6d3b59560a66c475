use serde::{Deserialize, Serialize};

/// One stored measurement. The timestamp is kept in the canonical
/// `YYYY-MM-DD HH:MM:SS` UTC text form the store uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: i64,
    pub co2_ppm: i64,
    pub humidity_percentage: f64,
    pub temperature_celsius: f64,
    pub timestamp: String,
}
