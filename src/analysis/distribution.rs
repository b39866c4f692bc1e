use crate::config::SpreadBin;
use crate::utils::maths_utils::{get_min_max, mean, pct, percentile, sample_std_dev, sorted};

/// Descriptive statistics over a set of spreads (pips).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation. NaN when `count < 2`.
    pub std_dev: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl DistributionSummary {
    /// `None` for an empty set, so callers never average over nothing.
    pub fn from_spreads(spreads: &[f64]) -> Option<Self> {
        if spreads.is_empty() {
            return None;
        }

        let ordered = sorted(spreads);
        let (min, max) = get_min_max(spreads);

        Some(DistributionSummary {
            count: spreads.len(),
            min,
            max,
            mean: mean(spreads),
            median: percentile(&ordered, 0.50),
            std_dev: sample_std_dev(spreads),
            p25: percentile(&ordered, 0.25),
            p75: percentile(&ordered, 0.75),
            p90: percentile(&ordered, 0.90),
            p95: percentile(&ordered, 0.95),
            p99: percentile(&ordered, 0.99),
        })
    }

    /// Label/value pairs in report order.
    pub fn rows(&self) -> [(&'static str, f64); 10] {
        [
            ("Min", self.min),
            ("Max", self.max),
            ("Mean", self.mean),
            ("Median", self.median),
            ("Std Dev", self.std_dev),
            ("25th Percentile", self.p25),
            ("75th Percentile", self.p75),
            ("90th Percentile", self.p90),
            ("95th Percentile", self.p95),
            ("99th Percentile", self.p99),
        ]
    }
}

/// How many spreads fell into one bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinCount {
    pub bin: SpreadBin,
    pub count: usize,
    /// Share of all observations, 0-100
    pub pct: f64,
}

/// Count spreads per bin. Bins are checked in order and each spread lands in the
/// first bin that contains it.
pub fn bucket_by_distribution(spreads: &[f64], bins: &[SpreadBin]) -> Vec<BinCount> {
    let mut counts = vec![0usize; bins.len()];
    for &spread in spreads {
        if let Some(idx) = bins.iter().position(|bin| bin.contains(spread)) {
            counts[idx] += 1;
        }
    }

    bins.iter()
        .zip(counts)
        .map(|(&bin, count)| BinCount {
            bin,
            count,
            pct: pct(count, spreads.len()),
        })
        .collect()
}
