//! Analysis and computation configuration

use crate::domain::{SessionWindow, WindowRule};

/// A labelled `[low, high)` spread bin (in pips). The last bin uses `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadBin {
    pub low: f64,
    pub high: f64,
    pub label: &'static str,
}

impl SpreadBin {
    pub fn contains(&self, spread_pips: f64) -> bool {
        if self.high.is_infinite() {
            spread_pips >= self.low
        } else {
            spread_pips >= self.low && spread_pips < self.high
        }
    }
}

/// Mean-spread ceilings (pips) for the hourly quality ladder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityThresholds {
    pub excellent_below: f64,
    pub good_below: f64,
    pub acceptable_below: f64,
}

/// Pass-rate ceilings (percent) separating the multiplier verdict bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassRateBands {
    pub too_restrictive_below: f64,
    pub very_limited_below: f64,
    pub limited_below: f64,
    pub good_balance_below: f64,
    pub permissive_below: f64,
}

/// Spread ceilings (pips) reported as "% < X pips" for each session window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionCutoffs {
    pub tight_pips: f64,
    pub loose_pips: f64,
}

/// Percentiles used to derive the actionable multipliers from the prime window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionableTargets {
    pub lower_quantile: f64,
    pub upper_quantile: f64,
    /// Fallback multiplier quoted alongside the data-driven ones
    pub conservative_multiplier: f64,
    /// Multiplier the live EA is currently tested with
    pub current_multiplier: f64,
    /// Time-based alternative: multiplier inside the prime window
    pub prime_hours_multiplier: f64,
    /// Time-based alternative: multiplier everywhere else
    pub other_hours_multiplier: f64,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // Gold: 1 pip = 10 points
    pub pip_factor: f64,
    // Current MaxSpreadPips in the trading EA
    pub base_threshold_pips: f64,

    pub quality: QualityThresholds,
    pub pass_rate: PassRateBands,
    pub session_cutoffs: SessionCutoffs,
    pub actionable: ActionableTargets,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    pip_factor: 10.0,
    base_threshold_pips: 2.0,

    quality: QualityThresholds {
        excellent_below: 10.0,
        good_below: 15.0,
        acceptable_below: 20.0,
    },

    pass_rate: PassRateBands {
        too_restrictive_below: 20.0,
        very_limited_below: 50.0,
        limited_below: 75.0,
        good_balance_below: 90.0,
        permissive_below: 95.0,
    },

    session_cutoffs: SessionCutoffs {
        tight_pips: 10.0,
        loose_pips: 15.0,
    },

    actionable: ActionableTargets {
        lower_quantile: 0.80,
        upper_quantile: 0.90,
        conservative_multiplier: 15.0,
        current_multiplier: 100.0,
        prime_hours_multiplier: 20.0,
        other_hours_multiplier: 10.0,
    },
};

pub const DEFAULT_MULTIPLIERS: [f64; 8] = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 50.0, 100.0];

pub const SPREAD_BINS: [SpreadBin; 7] = [
    SpreadBin { low: 0.0, high: 5.0, label: "0-5 pips (Excellent)" },
    SpreadBin { low: 5.0, high: 10.0, label: "5-10 pips (Good)" },
    SpreadBin { low: 10.0, high: 15.0, label: "10-15 pips (Acceptable)" },
    SpreadBin { low: 15.0, high: 20.0, label: "15-20 pips (High)" },
    SpreadBin { low: 20.0, high: 30.0, label: "20-30 pips (Very High)" },
    SpreadBin { low: 30.0, high: 50.0, label: "30-50 pips (Extreme)" },
    SpreadBin { low: 50.0, high: f64::INFINITY, label: ">50 pips (Prohibitive)" },
];

/// London/NY overlap. Also the window the actionable multipliers are derived from.
pub const OVERLAP_WINDOW: SessionWindow = SessionWindow {
    name: "London/NY Overlap (14:30-17:00)",
    rule: WindowRule::Hours { from: 14, to: 17 },
};

pub const LONDON_ONLY_WINDOW: SessionWindow = SessionWindow {
    name: "London Only (09:00-14:30)",
    rule: WindowRule::Hours { from: 9, to: 14 },
};

// Hour 22 belongs to both NY and Asian windows
pub const NY_ONLY_WINDOW: SessionWindow = SessionWindow {
    name: "NY Only (17:00-22:00)",
    rule: WindowRule::Hours { from: 17, to: 23 },
};

pub const ASIAN_WINDOW: SessionWindow = SessionWindow {
    name: "Asian Session (22:00-09:00)",
    rule: WindowRule::HoursWrapping { from: 22, to: 9 },
};

pub const WEEKEND_WINDOW: SessionWindow = SessionWindow {
    name: "Weekend/Off-Hours",
    rule: WindowRule::Weekdays(&[5, 6]),
};

pub const SESSION_WINDOWS: [SessionWindow; 5] = [
    OVERLAP_WINDOW,
    LONDON_ONLY_WINDOW,
    NY_ONLY_WINDOW,
    ASIAN_WINDOW,
    WEEKEND_WINDOW,
];

/// Everything the report generator needs, passed in explicitly.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Label printed in the report banner
    pub instrument: String,
    /// Raw spread points per pip
    pub pip_factor: f64,
    pub base_threshold_pips: f64,
    pub multipliers: Vec<f64>,
    pub spread_bins: Vec<SpreadBin>,
    pub session_windows: Vec<SessionWindow>,
    /// Window whose percentiles drive the actionable multipliers
    pub prime_window: SessionWindow,
    /// Window quoted as "avoid" in the actionable section
    pub off_hours_window: SessionWindow,
    pub quality: QualityThresholds,
    pub pass_rate: PassRateBands,
    pub session_cutoffs: SessionCutoffs,
    pub actionable: ActionableTargets,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            instrument: super::DEFAULT_INSTRUMENT.to_string(),
            pip_factor: ANALYSIS.pip_factor,
            base_threshold_pips: ANALYSIS.base_threshold_pips,
            multipliers: DEFAULT_MULTIPLIERS.to_vec(),
            spread_bins: SPREAD_BINS.to_vec(),
            session_windows: SESSION_WINDOWS.to_vec(),
            prime_window: OVERLAP_WINDOW,
            off_hours_window: ASIAN_WINDOW,
            quality: ANALYSIS.quality,
            pass_rate: ANALYSIS.pass_rate,
            session_cutoffs: ANALYSIS.session_cutoffs,
            actionable: ANALYSIS.actionable,
        }
    }
}
