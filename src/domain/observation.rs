use chrono::{Datelike, NaiveDateTime, Timelike};

/// One row of the spread log, with its calendar fields derived up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    /// Spread as exported by the broker, in points
    pub raw_spread: u32,
    pub spread_pips: f64,
    /// 0-23, broker time
    pub hour: u32,
    /// 0 = Monday .. 6 = Sunday
    pub day_of_week: u32,
}

impl Observation {
    pub fn new(timestamp: NaiveDateTime, raw_spread: u32, pip_factor: f64) -> Self {
        Observation {
            timestamp,
            raw_spread,
            spread_pips: raw_spread as f64 / pip_factor,
            hour: timestamp.hour(),
            day_of_week: timestamp.weekday().num_days_from_monday(),
        }
    }

    pub fn is_weekend(&self) -> bool {
        self.day_of_week >= 5
    }
}
