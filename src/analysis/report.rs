use anyhow::{Context, Result, ensure};
use chrono::NaiveDateTime;

use crate::analysis::distribution::{BinCount, DistributionSummary, bucket_by_distribution};
use crate::analysis::hourly::{HourlySummary, summarize_by_hour};
use crate::analysis::recommendations::{
    ActionableRecommendation, MultiplierRecommendation, recommend_actionable, recommend_multipliers,
};
use crate::analysis::sessions::{SessionSummary, summarize_by_session};
use crate::config::{QualityThresholds, ReportConfig};
use crate::domain::Observation;

/// Every section of the spread report, computed in one pass over the observations.
#[derive(Debug, Clone)]
pub struct SpreadReport {
    pub instrument: String,
    pub total_bars: usize,
    pub first_timestamp: NaiveDateTime,
    pub last_timestamp: NaiveDateTime,
    pub overall: DistributionSummary,
    pub distribution: Vec<BinCount>,
    pub hourly: Vec<HourlySummary>,
    pub sessions: Vec<SessionSummary>,
    pub base_threshold_pips: f64,
    pub multipliers: Vec<MultiplierRecommendation>,
    pub actionable: ActionableRecommendation,
    /// Thresholds the hourly grades were computed with, echoed in the threshold ladder
    pub quality: QualityThresholds,
}

impl SpreadReport {
    pub fn generate(observations: &[Observation], config: &ReportConfig) -> Result<Self> {
        ensure!(
            !observations.is_empty(),
            "Cannot build a spread report from zero observations"
        );
        ensure!(
            config.base_threshold_pips > 0.0,
            "Base spread threshold must be positive, got {}",
            config.base_threshold_pips
        );

        let spreads: Vec<f64> = observations.iter().map(|obs| obs.spread_pips).collect();

        let overall = DistributionSummary::from_spreads(&spreads)
            .context("Overall spread summary is empty")?;
        let first_timestamp = observations
            .iter()
            .map(|obs| obs.timestamp)
            .min()
            .context("No first timestamp")?;
        let last_timestamp = observations
            .iter()
            .map(|obs| obs.timestamp)
            .max()
            .context("No last timestamp")?;

        Ok(SpreadReport {
            instrument: config.instrument.clone(),
            total_bars: observations.len(),
            first_timestamp,
            last_timestamp,
            overall,
            distribution: bucket_by_distribution(&spreads, &config.spread_bins),
            hourly: summarize_by_hour(observations, &config.quality),
            sessions: summarize_by_session(
                observations,
                &config.session_windows,
                &config.session_cutoffs,
            ),
            base_threshold_pips: config.base_threshold_pips,
            multipliers: recommend_multipliers(
                &spreads,
                config.base_threshold_pips,
                &config.multipliers,
                &config.pass_rate,
            ),
            actionable: recommend_actionable(observations, config),
            quality: config.quality,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SpreadQuality;
    use chrono::{Duration, NaiveDate};

    /// One bar per hour for `days` days starting Monday 2025-05-05, spread rising in Asian hours.
    fn synthetic_week(days: i64) -> Vec<Observation> {
        let start = NaiveDate::from_ymd_opt(2025, 5, 5)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        (0..days * 24)
            .map(|i| {
                let ts = start + Duration::hours(i);
                let hour = (i % 24) as u32;
                let raw = if (9..22).contains(&hour) { 60 + hour } else { 250 };
                Observation::new(ts, raw, 10.0)
            })
            .collect()
    }

    #[test]
    fn test_generate_full_report() {
        let data = synthetic_week(7);
        let report = SpreadReport::generate(&data, &ReportConfig::default()).unwrap();

        assert_eq!(report.total_bars, 7 * 24);
        assert_eq!(report.first_timestamp, data[0].timestamp);
        assert_eq!(report.last_timestamp, data[data.len() - 1].timestamp);
        assert_eq!(report.hourly.len(), 24);
        // All five windows have bars over a full week
        assert_eq!(report.sessions.len(), 5);
        assert_eq!(report.multipliers.len(), 8);

        let binned: usize = report.distribution.iter().map(|b| b.count).sum();
        assert_eq!(binned, report.total_bars);

        let hourly_total: usize = report.hourly.iter().map(|h| h.count).sum();
        assert_eq!(hourly_total, report.total_bars);

        assert!(report.actionable.lower.is_some());
        let prime = report.actionable.prime_mean.unwrap();
        let off = report.actionable.off_hours_mean.unwrap();
        assert!(prime < off);
    }

    #[test]
    fn test_generate_rejects_empty_input() {
        assert!(SpreadReport::generate(&[], &ReportConfig::default()).is_err());
    }

    #[test]
    fn test_generate_rejects_zero_base() {
        let config = ReportConfig {
            base_threshold_pips: 0.0,
            ..ReportConfig::default()
        };
        assert!(SpreadReport::generate(&synthetic_week(1), &config).is_err());
    }

    #[test]
    fn test_generate_uses_configured_thresholds() {
        let data = synthetic_week(7);
        let mut config = ReportConfig::default();
        config.quality.excellent_below = 100.0;
        config.quality.good_below = 200.0;
        config.quality.acceptable_below = 300.0;
        config.session_cutoffs.tight_pips = 100.0;

        let report = SpreadReport::generate(&data, &config).unwrap();
        assert!(report.hourly.iter().all(|h| h.quality == SpreadQuality::Excellent));
        assert!(report.sessions.iter().all(|s| s.pct_below_tight == 100.0));
        assert_eq!(report.quality, config.quality);
    }
}
