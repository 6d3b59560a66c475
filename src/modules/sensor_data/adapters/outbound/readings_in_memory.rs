// In memory readings store.
//
// Purpose
// - Exercise the range use case and the HTTP surface without a database.
//
// Responsibilities
// - Keep readings in insertion order and answer inclusive range queries by
//   comparing canonical timestamp text, the same way the SQL store does.

use crate::modules::sensor_data::core::reading::SensorReading;
use crate::modules::sensor_data::use_cases::list_readings_by_range::queries_port::{
    QueryError, SensorReadingQueries,
};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryReadings {
    rows: RwLock<Vec<SensorReading>>,
    is_offline: bool,
}

impl InMemoryReadings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_readings(readings: Vec<SensorReading>) -> Self {
        Self {
            rows: RwLock::new(readings),
            is_offline: false,
        }
    }

    pub async fn insert(&self, reading: SensorReading) {
        self.rows.write().await.push(reading);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl SensorReadingQueries for InMemoryReadings {
    async fn list_by_range(
        &self,
        start_utc: &str,
        end_utc: &str,
    ) -> Result<Vec<SensorReading>, QueryError> {
        if self.is_offline {
            return Err(QueryError::Backend("Readings store offline".into()));
        }

        let guard = self.rows.read().await;
        Ok(guard
            .iter()
            .filter(|r| r.timestamp.as_str() >= start_utc && r.timestamp.as_str() <= end_utc)
            .cloned()
            .collect())
    }
}
