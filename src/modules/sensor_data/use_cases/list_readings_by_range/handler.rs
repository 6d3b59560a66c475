use crate::modules::sensor_data::core::reading::SensorReading;
use crate::modules::sensor_data::core::timestamp::{TimestampError, normalize};
use crate::modules::sensor_data::use_cases::list_readings_by_range::queries_port::{
    QueryError, SensorReadingQueries,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("start and end bounds are required")]
    MissingBounds,

    #[error("invalid start bound: {0}")]
    InvalidStart(#[source] TimestampError),

    #[error("invalid end bound: {0}")]
    InvalidEnd(#[source] TimestampError),

    #[error("no readings in range")]
    NotFound,

    #[error(transparent)]
    Query(#[from] QueryError),
}

pub struct ListReadingsByRangeHandler {
    queries: Arc<dyn SensorReadingQueries + Send + Sync>,
}

impl ListReadingsByRangeHandler {
    pub fn new(queries: Arc<dyn SensorReadingQueries + Send + Sync>) -> Self {
        Self { queries }
    }

    /// Validates and normalises the raw bounds, then runs the range query.
    /// An empty result is reported as `NotFound`.
    pub async fn handle(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<SensorReading>, ApplicationError> {
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => (start, end),
            _ => return Err(ApplicationError::MissingBounds),
        };

        let start_utc = normalize(start).map_err(ApplicationError::InvalidStart)?;
        let end_utc = normalize(end).map_err(ApplicationError::InvalidEnd)?;

        let readings = self.queries.list_by_range(&start_utc, &end_utc).await?;
        if readings.is_empty() {
            return Err(ApplicationError::NotFound);
        }
        Ok(readings)
    }
}
