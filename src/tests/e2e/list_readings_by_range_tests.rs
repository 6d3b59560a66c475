use crate::modules::sensor_data::adapters::outbound::readings_sqlite::SqliteReadings;
use crate::modules::sensor_data::adapters::outbound::readings_sqlite::sqlite_readings_tests::{
    create_table, insert, memory_pool,
};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::readings::SensorReadingBuilder;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

const RANGE_URI: &str = "/sensor_data?start=2024-01-01T00:00:00Z&end=2024-01-02T00:00:00Z";

fn app(pool: SqlitePool) -> Router {
    let readings = SqliteReadings::new(pool, "sensor_data").unwrap();
    router(AppState::new(Arc::new(readings)))
}

async fn empty_store() -> SqlitePool {
    let pool = memory_pool().await;
    create_table(&pool, "sensor_data").await;
    pool
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn returns_the_single_reading_in_range() {
    let pool = empty_store().await;
    let reading = SensorReadingBuilder::new()
        .id(1)
        .co2_ppm(640)
        .humidity_percentage(38.5)
        .temperature_celsius(23.0)
        .timestamp("2024-01-01 12:00:00")
        .build();
    insert(&pool, "sensor_data", &reading).await;

    let (status, body) = send(app(pool), "GET", RANGE_URI).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": 1,
            "co2_ppm": 640,
            "humidity_percentage": 38.5,
            "temperature_celsius": 23.0,
            "timestamp": "2024-01-01 12:00:00",
        }])
    );
}

#[tokio::test]
async fn returns_404_when_store_has_nothing_in_range() {
    let (status, body) = send(app(empty_store().await), "GET", RANGE_URI).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"No data found for the specified range");
}

#[tokio::test]
async fn returns_400_for_an_invalid_start() {
    let (status, body) = send(
        app(empty_store().await),
        "GET",
        "/sensor_data?start=bad&end=2024-01-02T00:00:00Z",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"Invalid start time format");
}

#[tokio::test]
async fn returns_405_for_post() {
    let (status, body) = send(app(empty_store().await), "POST", RANGE_URI).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, b"Only GET method is allowed");
}

#[tokio::test]
async fn returns_405_for_head_even_when_readings_match() {
    let pool = empty_store().await;
    insert(&pool, "sensor_data", &SensorReadingBuilder::new().build()).await;

    let (status, _) = send(app(pool), "HEAD", RANGE_URI).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn repeated_bounds_use_the_first_value() {
    let pool = empty_store().await;
    insert(&pool, "sensor_data", &SensorReadingBuilder::new().build()).await;

    let (status, body) = send(
        app(pool),
        "GET",
        "/sensor_data?start=2024-01-01T00:00:00Z&start=2024-01-01T01:00:00Z&end=2024-01-02T00:00:00Z",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn space_separated_start_is_rejected() {
    let pool = empty_store().await;
    insert(&pool, "sensor_data", &SensorReadingBuilder::new().build()).await;

    let (status, body) = send(
        app(pool),
        "GET",
        "/sensor_data?start=2024-01-01%2000:00:00Z&end=2024-01-02T00:00:00Z",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"Invalid start time format");
}

#[tokio::test]
async fn returns_400_when_end_is_missing() {
    let (status, _) = send(
        app(empty_store().await),
        "GET",
        "/sensor_data?start=2024-01-01T00:00:00Z",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn returns_500_when_the_table_is_missing() {
    let (status, body) = send(app(memory_pool().await), "GET", RANGE_URI).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, b"Failed to retrieve data");
}

#[tokio::test]
async fn offset_bounds_are_compared_in_utc() {
    let pool = empty_store().await;
    for (id, ts) in [(1, "2024-01-01 02:59:59"), (2, "2024-01-01 03:00:00")] {
        let reading = SensorReadingBuilder::new().id(id).timestamp(ts).build();
        insert(&pool, "sensor_data", &reading).await;
    }

    let (status, body) = send(
        app(pool),
        "GET",
        "/sensor_data?start=2024-01-01T12:00:00%2B09:00&end=2024-01-01T13:00:00%2B09:00",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], 2);
}

#[tokio::test]
async fn repeated_requests_return_identical_responses() {
    let pool = empty_store().await;
    for (id, ts) in [
        (1, "2024-01-01 08:00:00"),
        (2, "2024-01-01 09:00:00"),
        (3, "2024-01-03 09:00:00"),
    ] {
        let reading = SensorReadingBuilder::new().id(id).timestamp(ts).build();
        insert(&pool, "sensor_data", &reading).await;
    }
    let app = app(pool);

    let first = send(app.clone(), "GET", RANGE_URI).await;
    let second = send(app, "GET", RANGE_URI).await;

    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(first, second);
}
