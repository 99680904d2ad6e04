use thiserror::Error;

/// Failures that abort a whole scan. Per-keyword problems are `ScanWarning`s instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} is not a valid count: {value}")]
    InvalidCount { field: &'static str, value: String },

    #[error("days must be between {min} and {max}, got {days}")]
    InvalidLookback { days: u32, min: u32, max: u32 },

    #[error("invalid request URL {url}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
