//! SQLite backed readings store.
//!
//! The table name comes from startup configuration only and is interpolated
//! into the query text, so it is restricted to a plain SQL identifier and
//! quoted. Range bounds are always bound parameters.
use std::{path::Path, time::Duration};

use sqlx::{
    FromRow, SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::modules::sensor_data::core::reading::SensorReading;
use crate::modules::sensor_data::use_cases::list_readings_by_range::queries_port::{
    QueryError, SensorReadingQueries,
};

#[derive(Debug, FromRow)]
struct SensorReadingRow {
    id: i64,
    co2_ppm: i64,
    humidity_percentage: f64,
    temperature_celsius: f64,
    timestamp: String,
}

impl From<SensorReadingRow> for SensorReading {
    fn from(row: SensorReadingRow) -> Self {
        Self {
            id: row.id,
            co2_ppm: row.co2_ppm,
            humidity_percentage: row.humidity_percentage,
            temperature_celsius: row.temperature_celsius,
            timestamp: row.timestamp,
        }
    }
}

/// Opens the process-wide pool. The database must already exist; it is opened
/// read-only and one connection is established up front so a bad path fails
/// at startup rather than on the first request.
pub async fn connect(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(opts)
        .await
}

pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub struct SqliteReadings {
    pool: SqlitePool,
    range_query: String,
}

impl SqliteReadings {
    pub fn new(pool: SqlitePool, table_name: &str) -> Result<Self, QueryError> {
        if !is_valid_table_name(table_name) {
            return Err(QueryError::InvalidTable(table_name.to_string()));
        }

        let range_query = format!(
            r#"SELECT id, co2_ppm, humidity_percentage, temperature_celsius, timestamp
               FROM "{table_name}"
               WHERE timestamp BETWEEN ?1 AND ?2"#
        );

        Ok(Self { pool, range_query })
    }
}

fn map_sqlx_error(err: sqlx::Error) -> QueryError {
    match err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_) => QueryError::Decode(err.to_string()),
        other => QueryError::Backend(other.to_string()),
    }
}

#[async_trait::async_trait]
impl SensorReadingQueries for SqliteReadings {
    async fn list_by_range(
        &self,
        start_utc: &str,
        end_utc: &str,
    ) -> Result<Vec<SensorReading>, QueryError> {
        let rows: Vec<SensorReadingRow> = sqlx::query_as(&self.range_query)
            .bind(start_utc)
            .bind(end_utc)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(SensorReading::from).collect())
    }
}
