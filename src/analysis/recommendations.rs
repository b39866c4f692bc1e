use crate::config::{PassRateBands, ReportConfig};
use crate::domain::{Observation, PassRateBand};
use crate::utils::maths_utils::{mean, pct_where, percentile, sorted};

/// Outcome of allowing spreads up to `multiplier × base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplierRecommendation {
    pub multiplier: f64,
    /// Largest spread (pips) the multiplier lets through
    pub ceiling_pips: f64,
    /// Share of all bars with spread at or below the ceiling, 0-100
    pub pass_rate_pct: f64,
    pub band: PassRateBand,
}

/// Evaluate each candidate multiplier against the whole data set, in the order given.
pub fn recommend_multipliers(
    spreads: &[f64],
    base_threshold_pips: f64,
    multipliers: &[f64],
    bands: &PassRateBands,
) -> Vec<MultiplierRecommendation> {
    multipliers
        .iter()
        .map(|&multiplier| {
            let ceiling_pips = multiplier * base_threshold_pips;
            let pass_rate_pct = pct_where(spreads, |v| v <= ceiling_pips);
            MultiplierRecommendation {
                multiplier,
                ceiling_pips,
                pass_rate_pct,
                band: PassRateBand::from_pass_rate(pass_rate_pct, bands),
            }
        })
        .collect()
}

/// A spread ceiling expressed both in pips and as a multiple of the base threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestedMultiplier {
    /// Quantile of the prime window the ceiling was read from (e.g. 0.8)
    pub quantile: f64,
    pub spread_pips: f64,
    pub multiplier: f64,
}

impl SuggestedMultiplier {
    fn from_quantile(ordered: &[f64], quantile: f64, base_threshold_pips: f64) -> Self {
        let spread_pips = percentile(ordered, quantile);
        SuggestedMultiplier {
            quantile,
            spread_pips,
            multiplier: spread_pips / base_threshold_pips,
        }
    }
}

/// Settings derived from the prime (overlap) window, plus the means quoted next to them.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionableRecommendation {
    pub base_threshold_pips: f64,
    pub prime_window: &'static str,
    pub off_hours_window: &'static str,
    /// `None` when the prime window has no bars
    pub lower: Option<SuggestedMultiplier>,
    pub upper: Option<SuggestedMultiplier>,
    pub prime_mean: Option<f64>,
    pub off_hours_mean: Option<f64>,
    pub conservative_multiplier: f64,
    pub current_multiplier: f64,
    /// Time-based alternative: multiplier inside the prime window, and everywhere else
    pub prime_hours_multiplier: f64,
    pub other_hours_multiplier: f64,
}

pub fn recommend_actionable(
    observations: &[Observation],
    config: &ReportConfig,
) -> ActionableRecommendation {
    let targets = &config.actionable;
    let prime = config.prime_window.spreads(observations);
    let off_hours = config.off_hours_window.spreads(observations);
    let ordered = sorted(&prime);
    let base = config.base_threshold_pips;

    let (lower, upper) = if ordered.is_empty() {
        (None, None)
    } else {
        (
            Some(SuggestedMultiplier::from_quantile(&ordered, targets.lower_quantile, base)),
            Some(SuggestedMultiplier::from_quantile(&ordered, targets.upper_quantile, base)),
        )
    };

    ActionableRecommendation {
        base_threshold_pips: base,
        prime_window: config.prime_window.name,
        off_hours_window: config.off_hours_window.name,
        lower,
        upper,
        prime_mean: (!prime.is_empty()).then(|| mean(&prime)),
        off_hours_mean: (!off_hours.is_empty()).then(|| mean(&off_hours)),
        conservative_multiplier: targets.conservative_multiplier,
        current_multiplier: targets.current_multiplier,
        prime_hours_multiplier: targets.prime_hours_multiplier,
        other_hours_multiplier: targets.other_hours_multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ANALYSIS, DEFAULT_MULTIPLIERS};
    use chrono::NaiveDate;

    fn obs(hour: u32, minute: u32, raw: u32) -> Observation {
        let ts = NaiveDate::from_ymd_opt(2025, 4, 15)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap();
        Observation::new(ts, raw, 10.0)
    }

    #[test]
    fn test_all_one_pip_is_very_permissive() {
        let spreads = vec![1.0; 24];
        let multipliers = [1.0, 1.5, 5.0, 10.0, 100.0];
        for rec in recommend_multipliers(&spreads, 2.0, &multipliers, &ANALYSIS.pass_rate) {
            assert_eq!(rec.pass_rate_pct, 100.0);
            assert_eq!(rec.band, PassRateBand::VeryPermissive);
        }
    }

    #[test]
    fn test_pass_rate_non_decreasing() {
        let spreads: Vec<f64> = (0..500).map(|i| ((i * 37) % 400) as f64 / 4.0).collect();
        let recs = recommend_multipliers(
            &spreads,
            ANALYSIS.base_threshold_pips,
            &DEFAULT_MULTIPLIERS,
            &ANALYSIS.pass_rate,
        );
        assert_eq!(recs.len(), DEFAULT_MULTIPLIERS.len());
        for pair in recs.windows(2) {
            assert!(pair[0].pass_rate_pct <= pair[1].pass_rate_pct);
            assert!(pair[0].band <= pair[1].band);
        }
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let recs = recommend_multipliers(&[10.0, 10.0, 10.1, 30.0], 2.0, &[5.0], &ANALYSIS.pass_rate);
        assert_eq!(recs[0].ceiling_pips, 10.0);
        assert_eq!(recs[0].pass_rate_pct, 50.0);
        assert_eq!(recs[0].band, PassRateBand::Limited);
    }

    #[test]
    fn test_actionable_from_overlap_only() {
        // Overlap bars: 5..=14 pips. Off-hours bars are much wider and must not leak in.
        let mut data: Vec<Observation> = (0..10u32).map(|m| obs(15, m, 50 + m * 10)).collect();
        data.extend((0..4u32).map(|m| obs(2, m, 400)));

        let config = ReportConfig::default();
        let rec = recommend_actionable(&data, &config);

        let lower = rec.lower.unwrap();
        let upper = rec.upper.unwrap();
        // p80 of 5..=14 at position 7.2 -> 12.2, p90 at 8.1 -> 13.1
        assert!((lower.spread_pips - 12.2).abs() < 1e-9);
        assert!((upper.spread_pips - 13.1).abs() < 1e-9);
        assert!((lower.multiplier - 6.1).abs() < 1e-9);
        assert!((upper.multiplier - 6.55).abs() < 1e-9);
        assert!((rec.prime_mean.unwrap() - 9.5).abs() < 1e-9);
        assert!((rec.off_hours_mean.unwrap() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_actionable_without_overlap_bars() {
        let data = vec![obs(2, 0, 300)];
        let rec = recommend_actionable(&data, &ReportConfig::default());
        assert!(rec.lower.is_none());
        assert!(rec.upper.is_none());
        assert!(rec.prime_mean.is_none());
        assert!(rec.off_hours_mean.is_some());
    }

    #[test]
    fn test_actionable_follows_config_targets() {
        let data: Vec<Observation> = (0..10u32).map(|m| obs(15, m, 50 + m * 10)).collect();
        let mut config = ReportConfig::default();
        config.actionable.lower_quantile = 0.5;
        config.actionable.prime_hours_multiplier = 12.5;
        config.actionable.other_hours_multiplier = 4.0;

        let rec = recommend_actionable(&data, &config);
        // median of 5..=14 -> 9.5
        assert!((rec.lower.unwrap().spread_pips - 9.5).abs() < 1e-9);
        assert_eq!(rec.prime_hours_multiplier, 12.5);
        assert_eq!(rec.other_hours_multiplier, 4.0);

        let default_rec = recommend_actionable(&data, &ReportConfig::default());
        assert_eq!(default_rec.prime_hours_multiplier, 20.0);
        assert_eq!(default_rec.other_hours_multiplier, 10.0);
    }

    #[test]
    fn test_bands_follow_config() {
        // 50% pass rate: LIMITED by default, PERMISSIVE with looser bands
        let spreads = [10.0, 10.0, 10.1, 30.0];
        let lenient = PassRateBands {
            too_restrictive_below: 5.0,
            very_limited_below: 10.0,
            limited_below: 20.0,
            good_balance_below: 40.0,
            permissive_below: 60.0,
        };
        let recs = recommend_multipliers(&spreads, 2.0, &[5.0], &lenient);
        assert_eq!(recs[0].band, PassRateBand::Permissive);
    }
}
