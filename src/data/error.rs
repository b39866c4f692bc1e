use std::path::PathBuf;

use thiserror::Error;

/// Why a spread log could not be turned into observations.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Failed to open spread log {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read header row of {path:?}")]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Spread log {path:?} has no {column} column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("Malformed row {row} in spread log")]
    MalformedRow {
        row: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid timestamp '{date} {time}' on row {row}")]
    InvalidTimestamp {
        row: u64,
        date: String,
        time: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Spread log {path:?} contains no data rows")]
    NoObservations { path: PathBuf },
}
