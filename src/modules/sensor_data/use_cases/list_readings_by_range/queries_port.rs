use crate::modules::sensor_data::core::reading::SensorReading;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("invalid table name '{0}'")]
    InvalidTable(String),
}

/// Read side of the readings store.
///
/// Bounds are canonical UTC text (see `core::timestamp::normalize`) and are
/// inclusive on both ends. Rows come back in storage order. A failure on any
/// row fails the whole call.
#[async_trait]
pub trait SensorReadingQueries {
    async fn list_by_range(
        &self,
        start_utc: &str,
        end_utc: &str,
    ) -> Result<Vec<SensorReading>, QueryError>;
}
