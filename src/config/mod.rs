//! Configuration module for the spread report.

pub mod analysis;

mod debug; // Private: use crate::config::PRINT_* rather than crate::config::debug::PRINT_*
pub use debug::{PRINT_EMPTY_SESSIONS, PRINT_HOURLY_CLASSIFICATION, PRINT_LOAD_SUMMARY};

pub mod persistence;

// Re-export commonly used items
pub use analysis::{
    ANALYSIS, ASIAN_WINDOW, ActionableTargets, DEFAULT_MULTIPLIERS, OVERLAP_WINDOW,
    PassRateBands, QualityThresholds, ReportConfig, SESSION_WINDOWS, SPREAD_BINS, SessionCutoffs,
    SpreadBin,
};
pub use persistence::{
    DATE_COLUMN, DEFAULT_INSTRUMENT, DEFAULT_SPREAD_LOG_PATH, REQUIRED_COLUMNS, SPREAD_COLUMN,
    SPREAD_LOG_DELIMITER, TIME_COLUMN,
};
