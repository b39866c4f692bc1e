//! Input file locations and layout

/// Spread log read when no path is given on the command line
pub const DEFAULT_SPREAD_LOG_PATH: &str = "Reference/XAUUSD.sml_M1_202501020105_202512312358.csv";

/// Field separator of the MetaTrader history export
pub const SPREAD_LOG_DELIMITER: u8 = b'\t';

/// Header names of the columns the loader needs. Any other columns are ignored.
pub const DATE_COLUMN: &str = "<DATE>";
pub const TIME_COLUMN: &str = "<TIME>";
pub const SPREAD_COLUMN: &str = "<SPREAD>";

pub const REQUIRED_COLUMNS: [&str; 3] = [DATE_COLUMN, TIME_COLUMN, SPREAD_COLUMN];

/// Instrument label printed in the report banner
pub const DEFAULT_INSTRUMENT: &str = "GOLD (XAUUSD)";
