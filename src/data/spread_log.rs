use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::config::{REQUIRED_COLUMNS, SPREAD_LOG_DELIMITER};
#[cfg(debug_assertions)]
use crate::config::{DATE_COLUMN, PRINT_LOAD_SUMMARY, SPREAD_COLUMN, TIME_COLUMN};
use crate::data::DataLoadError;
use crate::domain::Observation;
use crate::utils::time_utils::parse_broker_timestamp;

/// The columns we keep from one line of the MetaTrader export.
/// `spread` is unsigned, so a negative `<SPREAD>` fails to deserialize and surfaces as `MalformedRow`.
#[derive(Debug, Deserialize)]
struct SpreadRow {
    #[serde(rename = "<DATE>")]
    date: String,
    #[serde(rename = "<TIME>")]
    time: String,
    #[serde(rename = "<SPREAD>")]
    spread: u32,
}

/// Load a tab-separated spread log into observations, in file order.
/// The file handle is released before this returns.
pub fn load_spread_log(path: &Path, pip_factor: f64) -> Result<Vec<Observation>, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_spread_log(BufReader::new(file), path, pip_factor)
}

/// Parse an already opened spread log. `path` is only used in error messages.
pub fn read_spread_log<R: Read>(
    input: R,
    path: &Path,
    pip_factor: f64,
) -> Result<Vec<Observation>, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(SPREAD_LOG_DELIMITER)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|source| DataLoadError::Header {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    // Fail on layout before touching any rows
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    #[cfg(debug_assertions)]
    if PRINT_LOAD_SUMMARY {
        log::info!(
            "Spread log columns: {} at {:?}, {} at {:?}, {} at {:?}",
            DATE_COLUMN,
            headers.iter().position(|h| h == DATE_COLUMN),
            TIME_COLUMN,
            headers.iter().position(|h| h == TIME_COLUMN),
            SPREAD_COLUMN,
            headers.iter().position(|h| h == SPREAD_COLUMN),
        );
    }

    let mut observations = Vec::new();
    for (idx, result) in reader.deserialize::<SpreadRow>().enumerate() {
        let row = idx as u64 + 1;
        let record = result.map_err(|source| DataLoadError::MalformedRow { row, source })?;
        let timestamp = parse_broker_timestamp(&record.date, &record.time).map_err(|source| {
            DataLoadError::InvalidTimestamp {
                row,
                date: record.date.clone(),
                time: record.time.clone(),
                source,
            }
        })?;
        observations.push(Observation::new(timestamp, record.spread, pip_factor));
    }

    if observations.is_empty() {
        return Err(DataLoadError::NoObservations {
            path: path.to_path_buf(),
        });
    }

    #[cfg(debug_assertions)]
    if PRINT_LOAD_SUMMARY {
        log::info!("Loaded {} observations from {:?}", observations.len(), path);
    }

    Ok(observations)
}
