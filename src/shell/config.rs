use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "./db/udco2s_data.db";
pub const DEFAULT_TABLE_NAME: &str = "sensor_data";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub db_path: PathBuf,
    pub table_name: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset, empty or unparsable
    /// values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            db_path: get("DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path),
            table_name: get("TABLE_NAME").unwrap_or(defaults.table_name),
            port: get("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}
