use itertools::Itertools;

#[cfg(debug_assertions)]
use crate::config::PRINT_HOURLY_CLASSIFICATION;
use crate::config::QualityThresholds;
use crate::domain::{Observation, SpreadQuality, TradingSession};
use crate::utils::maths_utils::{get_min_max, mean, percentile, round_dp, sorted};

/// Decimal places kept on hourly aggregates. Quality is graded on the rounded mean,
/// so the label always agrees with the printed value.
const HOURLY_DECIMALS: i32 = 2;

/// Spread statistics for one hour of the day. Mean, min, max and p90 are rounded to 2 dp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlySummary {
    pub hour: u32,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub p90: f64,
    pub count: usize,
    pub session: TradingSession,
    pub quality: SpreadQuality,
}

/// Group observations by hour of day. Hours with no data are skipped, not zero-filled.
pub fn summarize_by_hour(
    observations: &[Observation],
    quality_thresholds: &QualityThresholds,
) -> Vec<HourlySummary> {
    observations
        .iter()
        .into_group_map_by(|obs| obs.hour)
        .into_iter()
        .sorted_by_key(|(hour, _)| *hour)
        .map(|(hour, group)| {
            let spreads: Vec<f64> = group.iter().map(|obs| obs.spread_pips).collect();
            let (min, max) = get_min_max(&spreads);
            let avg = round_dp(mean(&spreads), HOURLY_DECIMALS);
            let session = TradingSession::from_hour(hour);
            let quality = SpreadQuality::from_mean_spread(avg, quality_thresholds);

            #[cfg(debug_assertions)]
            if PRINT_HOURLY_CLASSIFICATION {
                log::info!("{:02}:00 -> {} / {} (avg {:.2})", hour, session, quality, avg);
            }

            HourlySummary {
                hour,
                mean: avg,
                min: round_dp(min, HOURLY_DECIMALS),
                max: round_dp(max, HOURLY_DECIMALS),
                p90: round_dp(percentile(&sorted(&spreads), 0.90), HOURLY_DECIMALS),
                count: spreads.len(),
                session,
                quality,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;
    use chrono::NaiveDate;

    fn obs(hour: u32, minute: u32, raw: u32) -> Observation {
        let ts = NaiveDate::from_ymd_opt(2025, 2, 12)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap();
        Observation::new(ts, raw, 10.0)
    }

    #[test]
    fn test_absent_hours_skipped() {
        let data = vec![obs(15, 0, 80), obs(3, 0, 250), obs(15, 1, 120), obs(3, 1, 300)];
        let hours = summarize_by_hour(&data, &ANALYSIS.quality);
        let present: Vec<u32> = hours.iter().map(|h| h.hour).collect();
        assert_eq!(present, vec![3, 15]);
    }

    #[test]
    fn test_hour_stats_and_labels() {
        let data = vec![obs(15, 0, 80), obs(15, 1, 120), obs(3, 0, 250), obs(3, 1, 300)];
        let hours = summarize_by_hour(&data, &ANALYSIS.quality);

        let asia = &hours[0];
        assert_eq!(asia.count, 2);
        assert!((asia.mean - 27.5).abs() < 1e-12);
        assert_eq!(asia.session, TradingSession::OffHours);
        assert_eq!(asia.quality, SpreadQuality::Poor);

        let overlap = &hours[1];
        assert!((overlap.mean - 10.0).abs() < 1e-12);
        assert_eq!(overlap.session, TradingSession::Overlap);
        assert_eq!(overlap.quality, SpreadQuality::Good);
    }

    #[test]
    fn test_min_p90_max_ordering() {
        let data: Vec<Observation> = (0..24u32)
            .flat_map(|h| (0..10u32).map(move |m| obs(h, m, 20 + h * 7 + m * m)))
            .collect();
        let hours = summarize_by_hour(&data, &ANALYSIS.quality);
        assert_eq!(hours.len(), 24);
        for h in &hours {
            assert!(h.min <= h.mean && h.mean <= h.max, "hour {}", h.hour);
            assert!(h.min <= h.p90 && h.p90 <= h.max, "hour {}", h.hour);
        }
        let total: usize = hours.iter().map(|h| h.count).sum();
        assert_eq!(total, data.len());
    }

    #[test]
    fn test_quality_graded_on_rounded_mean() {
        // 249 bars at 10.0 pips and one at 9.0: mean 9.996 prints as 10.00
        let mut data: Vec<Observation> = (0..249).map(|_| obs(10, 0, 100)).collect();
        data.push(obs(10, 1, 90));

        let hours = summarize_by_hour(&data, &ANALYSIS.quality);
        let h = &hours[0];
        assert_eq!(format!("{:.2}", h.mean), "10.00");
        assert_eq!(h.mean, 10.0);
        assert_eq!(h.quality, SpreadQuality::Good);
        assert_eq!(h.min, 9.0);
        assert_eq!(h.max, 10.0);
    }

    #[test]
    fn test_aggregates_rounded_to_two_places() {
        // 1.0, 1.0, 1.1 pips: mean 1.0333.. p90 1.08
        let data = vec![obs(4, 0, 10), obs(4, 1, 10), obs(4, 2, 11)];
        let h = summarize_by_hour(&data, &ANALYSIS.quality)[0];
        assert_eq!(h.mean, 1.03);
        assert_eq!(h.p90, 1.08);
    }
}
