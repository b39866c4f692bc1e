// Domain types and value objects
pub mod observation;
pub mod quality;
pub mod session;

// Re-export commonly used types
pub use observation::Observation;
pub use quality::{PassRateBand, SpreadQuality};
pub use session::{SessionWindow, TradingSession, WindowRule};
