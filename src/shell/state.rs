use crate::modules::sensor_data::use_cases::list_readings_by_range::handler::ListReadingsByRangeHandler;
use crate::modules::sensor_data::use_cases::list_readings_by_range::queries_port::SensorReadingQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_readings: Arc<ListReadingsByRangeHandler>,
}

impl AppState {
    pub fn new(queries: Arc<dyn SensorReadingQueries + Send + Sync>) -> Self {
        Self {
            list_readings: Arc::new(ListReadingsByRangeHandler::new(queries)),
        }
    }
}
