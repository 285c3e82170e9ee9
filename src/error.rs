use thiserror::Error;

/// Everything that can abort a run. There is no retry or partial output:
/// callers surface the first error and stop.
#[derive(Error, Debug)]
pub enum BlotterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response payload is not a record list: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("dataset is missing expected column(s): {columns:?}")]
    Schema { columns: Vec<&'static str> },

    #[error("cannot coerce {column} value {value:?}: {reason}")]
    TypeCoercion {
        column: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, BlotterError>;
