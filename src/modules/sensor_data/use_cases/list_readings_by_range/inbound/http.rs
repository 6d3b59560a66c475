use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::sensor_data::use_cases::list_readings_by_range::handler::ApplicationError;
use crate::shell::state::AppState;

/// Repeated keys are allowed; the first value of each bound wins.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let (start, end) = match params {
        Ok(Query(pairs)) => (first_value(&pairs, "start"), first_value(&pairs, "end")),
        Err(_) => (None, None),
    };

    match state
        .list_readings
        .handle(start.as_deref(), end.as_deref())
        .await
    {
        Ok(readings) => Json(readings).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        "Only GET method is allowed",
    )
        .into_response()
}

fn error_response(err: ApplicationError) -> Response {
    let (status, message) = match &err {
        ApplicationError::MissingBounds => (
            StatusCode::BAD_REQUEST,
            "Start and end query parameters are required",
        ),
        ApplicationError::InvalidStart(_) => {
            tracing::debug!(error = %err, "rejected start bound");
            (StatusCode::BAD_REQUEST, "Invalid start time format")
        }
        ApplicationError::InvalidEnd(_) => {
            tracing::debug!(error = %err, "rejected end bound");
            (StatusCode::BAD_REQUEST, "Invalid end time format")
        }
        ApplicationError::NotFound => {
            tracing::debug!("no readings in requested range");
            (
                StatusCode::NOT_FOUND,
                "No data found for the specified range",
            )
        }
        ApplicationError::Query(_) => {
            tracing::error!(error = %err, "range query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve data")
        }
    };
    (status, message).into_response()
}
