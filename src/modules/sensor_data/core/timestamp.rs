// Timestamp normalisation for range bounds.
//
// Callers send RFC 3339 instants with any offset. The store keeps UTC text in
// `YYYY-MM-DD HH:MM:SS`, so bounds are converted to that form before they are
// compared against stored values.

use chrono::{DateTime, Utc};
use thiserror::Error;

pub const STORED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("invalid RFC 3339 timestamp '{input}': date and time must be separated by 'T'")]
    Separator { input: String },

    #[error("invalid RFC 3339 timestamp '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl TimestampError {
    pub fn input(&self) -> &str {
        match self {
            Self::Separator { input } | Self::Parse { input, .. } => input,
        }
    }
}

/// Parses an RFC 3339 timestamp and renders it as canonical UTC storage text.
/// Fractional seconds are truncated.
pub fn normalize(input: &str) -> Result<String, TimestampError> {
    // chrono also takes a space or a lowercase 't' here; only 'T' is accepted.
    if input.as_bytes().get(10) != Some(&b'T') {
        return Err(TimestampError::Separator {
            input: input.to_string(),
        });
    }

    let parsed = DateTime::parse_from_rfc3339(input).map_err(|source| TimestampError::Parse {
        input: input.to_string(),
        source,
    })?;

    Ok(parsed
        .with_timezone(&Utc)
        .format(STORED_TIMESTAMP_FORMAT)
        .to_string())
}
