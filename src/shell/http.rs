use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::sensor_data::use_cases::list_readings_by_range::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/sensor_data",
            get(list_http::handle)
                .head(list_http::method_not_allowed)
                .fallback(list_http::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
