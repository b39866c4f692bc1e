use std::fmt;

use crate::config::{PassRateBands, QualityThresholds};

/// Execution quality implied by an average spread.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::EnumIter)]
pub enum SpreadQuality {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl SpreadQuality {
    pub fn from_mean_spread(mean_pips: f64, q: &QualityThresholds) -> Self {
        if mean_pips < q.excellent_below {
            SpreadQuality::Excellent
        } else if mean_pips < q.good_below {
            SpreadQuality::Good
        } else if mean_pips < q.acceptable_below {
            SpreadQuality::Acceptable
        } else {
            SpreadQuality::Poor
        }
    }

    /// Range of spreads this grade covers, as shown in the threshold ladder.
    pub fn range_label(&self, q: &QualityThresholds) -> String {
        match self {
            SpreadQuality::Excellent => format!("< {} pips", q.excellent_below),
            SpreadQuality::Good => format!("{}-{} pips", q.excellent_below, q.good_below),
            SpreadQuality::Acceptable => format!("{}-{} pips", q.good_below, q.acceptable_below),
            SpreadQuality::Poor => format!("> {} pips", q.acceptable_below),
        }
    }

    /// What to do with a signal when the spread sits in this grade.
    pub fn action(&self) -> &'static str {
        match self {
            SpreadQuality::Excellent => "execute immediately",
            SpreadQuality::Good => "acceptable for high confidence signals",
            SpreadQuality::Acceptable => "only for very high confidence, 120+",
            SpreadQuality::Poor => "skip trade",
        }
    }
}

impl fmt::Display for SpreadQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SpreadQuality::Excellent => f.pad("EXCELLENT"),
            SpreadQuality::Good => f.pad("GOOD"),
            SpreadQuality::Acceptable => f.pad("ACCEPTABLE"),
            SpreadQuality::Poor => f.pad("POOR"),
        }
    }
}

/// Verdict on a spread multiplier, from the share of bars it would let through.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, strum_macros::EnumIter)]
pub enum PassRateBand {
    TooRestrictive,
    VeryLimited,
    Limited,
    GoodBalance,
    Permissive,
    VeryPermissive,
}

impl PassRateBand {
    /// `pass_rate_pct` is a percentage in `0..=100`.
    pub fn from_pass_rate(pass_rate_pct: f64, b: &PassRateBands) -> Self {
        if pass_rate_pct < b.too_restrictive_below {
            PassRateBand::TooRestrictive
        } else if pass_rate_pct < b.very_limited_below {
            PassRateBand::VeryLimited
        } else if pass_rate_pct < b.limited_below {
            PassRateBand::Limited
        } else if pass_rate_pct < b.good_balance_below {
            PassRateBand::GoodBalance
        } else if pass_rate_pct < b.permissive_below {
            PassRateBand::Permissive
        } else {
            PassRateBand::VeryPermissive
        }
    }
}

impl fmt::Display for PassRateBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PassRateBand::TooRestrictive => f.pad("TOO RESTRICTIVE"),
            PassRateBand::VeryLimited => f.pad("VERY LIMITED"),
            PassRateBand::Limited => f.pad("LIMITED"),
            PassRateBand::GoodBalance => f.pad("GOOD BALANCE"),
            PassRateBand::Permissive => f.pad("PERMISSIVE"),
            PassRateBand::VeryPermissive => f.pad("VERY PERMISSIVE"),
        }
    }
}
