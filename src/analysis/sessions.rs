#[cfg(debug_assertions)]
use crate::config::PRINT_EMPTY_SESSIONS;
use crate::config::analysis::SessionCutoffs;
use crate::domain::{Observation, SessionWindow};
use crate::utils::maths_utils::{mean, pct_where, percentile, sorted};

/// Spread statistics for one session window.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub name: &'static str,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    /// Share of bars below the tight cutoff (10 pips by default), 0-100
    pub pct_below_tight: f64,
    /// Share of bars below the loose cutoff (15 pips by default), 0-100
    pub pct_below_loose: f64,
    pub count: usize,
}

impl SessionSummary {
    /// `None` when the window matched nothing.
    pub fn from_window(
        window: &SessionWindow,
        observations: &[Observation],
        cutoffs: &SessionCutoffs,
    ) -> Option<Self> {
        let spreads = window.spreads(observations);
        if spreads.is_empty() {
            return None;
        }
        let ordered = sorted(&spreads);

        Some(SessionSummary {
            name: window.name,
            mean: mean(&spreads),
            median: percentile(&ordered, 0.50),
            p90: percentile(&ordered, 0.90),
            pct_below_tight: pct_where(&spreads, |v| v < cutoffs.tight_pips),
            pct_below_loose: pct_where(&spreads, |v| v < cutoffs.loose_pips),
            count: spreads.len(),
        })
    }
}

/// Summarise every window independently, keeping window order. Empty windows are left out.
pub fn summarize_by_session(
    observations: &[Observation],
    windows: &[SessionWindow],
    cutoffs: &SessionCutoffs,
) -> Vec<SessionSummary> {
    windows
        .iter()
        .filter_map(|window| {
            let summary = SessionSummary::from_window(window, observations, cutoffs);

            #[cfg(debug_assertions)]
            if PRINT_EMPTY_SESSIONS && summary.is_none() {
                log::info!("Session window '{}' matched no observations", window.name);
            }

            summary
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ANALYSIS, SESSION_WINDOWS};
    use chrono::NaiveDate;

    fn obs(day: u32, hour: u32, raw: u32) -> Observation {
        // March 2025: the 3rd is a Monday, the 8th a Saturday
        let ts = NaiveDate::from_ymd_opt(2025, 3, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap();
        Observation::new(ts, raw, 10.0)
    }

    #[test]
    fn test_windows_are_independent() {
        let data = vec![
            obs(3, 15, 60),  // overlap
            obs(3, 15, 140), // overlap
            obs(3, 10, 90),  // london
            obs(8, 15, 200), // saturday overlap: overlap + weekend
        ];
        let sessions = summarize_by_session(&data, &SESSION_WINDOWS, &ANALYSIS.session_cutoffs);

        let names: Vec<&str> = sessions.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "London/NY Overlap (14:30-17:00)",
                "London Only (09:00-14:30)",
                "Weekend/Off-Hours",
            ]
        );

        let overlap = &sessions[0];
        assert_eq!(overlap.count, 3);
        assert!((overlap.mean - (6.0 + 14.0 + 20.0) / 3.0).abs() < 1e-12);
        assert!((overlap.median - 14.0).abs() < 1e-12);
        assert!((overlap.pct_below_tight - 100.0 / 3.0).abs() < 1e-9);
        assert!((overlap.pct_below_loose - 200.0 / 3.0).abs() < 1e-9);

        // Observation counts overlap across windows
        let total: usize = sessions.iter().map(|s| s.count).sum();
        assert!(total > data.len());
    }

    #[test]
    fn test_empty_window_returns_none() {
        let data = vec![obs(3, 10, 90)];
        assert!(SessionSummary::from_window(&SESSION_WINDOWS[4], &data, &ANALYSIS.session_cutoffs).is_none());
    }
}
