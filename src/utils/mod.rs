// Small shared helpers: statistics, timestamps, text formatting
pub mod maths_utils;
pub mod text_utils;
pub mod time_utils;

pub use time_utils::TimeUtils;
