// Spread aggregation, session classification and parameter recommendations
pub mod distribution;
pub mod hourly;
pub mod recommendations;
pub mod report;
pub mod sessions;

// Re-export commonly used types
pub use distribution::{BinCount, DistributionSummary, bucket_by_distribution};
pub use hourly::{HourlySummary, summarize_by_hour};
pub use recommendations::{
    ActionableRecommendation, MultiplierRecommendation, SuggestedMultiplier,
    recommend_actionable, recommend_multipliers,
};
pub use report::SpreadReport;
pub use sessions::{SessionSummary, summarize_by_session};
