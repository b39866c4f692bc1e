// Spread log loading
pub mod error;
pub mod spread_log;

// Re-export commonly used types
pub use error::DataLoadError;
pub use spread_log::{load_spread_log, read_spread_log};
