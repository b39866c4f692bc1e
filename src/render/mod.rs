//! Plain-text rendering of a `SpreadReport`.
//!
//! Sections always appear in the same order: banner, overall statistics,
//! distribution, hourly table, session table, multiplier table, actionable
//! recommendations, completion banner.

use std::path::Path;

use strum::IntoEnumIterator;

use crate::analysis::{
    ActionableRecommendation, BinCount, DistributionSummary, HourlySummary,
    MultiplierRecommendation, SessionSummary, SpreadReport,
};
use crate::config::QualityThresholds;
use crate::domain::SpreadQuality;
use crate::utils::text_utils::{banner_rule, table_rule, with_thousands};
use crate::utils::time_utils::format_timestamp;

fn section_header(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n{}\n{}\n", banner_rule(), title, banner_rule()));
}

fn optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "n/a".to_string(),
    }
}

/// Render the full report, `source` is echoed in the banner.
pub fn render_report(report: &SpreadReport, source: &Path) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n{} SPREAD ANALYSIS\n{}\n",
        banner_rule(),
        report.instrument,
        banner_rule()
    ));
    out.push_str(&format!("\nLoaded data from: {}\n", source.display()));
    out.push_str(&format!("Total M1 bars: {}\n", with_thousands(report.total_bars)));
    out.push_str(&format!(
        "Date range: {} to {}\n",
        format_timestamp(&report.first_timestamp),
        format_timestamp(&report.last_timestamp)
    ));

    render_overall(&mut out, &report.overall);
    render_distribution(&mut out, &report.distribution);
    render_hourly(&mut out, &report.hourly);
    render_sessions(&mut out, &report.sessions);
    render_multipliers(&mut out, report.base_threshold_pips, &report.multipliers);
    render_actionable(&mut out, &report.actionable, &report.quality);

    section_header(&mut out, "ANALYSIS COMPLETE");
    out
}

pub fn render_overall(out: &mut String, overall: &DistributionSummary) {
    section_header(out, "OVERALL SPREAD STATISTICS");
    for (label, value) in overall.rows() {
        out.push_str(&format!("{:20}: {:8.2} pips\n", label, value));
    }
}

pub fn render_distribution(out: &mut String, bins: &[BinCount]) {
    section_header(out, "SPREAD DISTRIBUTION (% of time)");
    for b in bins {
        out.push_str(&format!(
            "{:30}: {:6.2}%  ({} bars)\n",
            b.bin.label,
            b.pct,
            with_thousands(b.count)
        ));
    }
}

pub fn render_hourly(out: &mut String, hours: &[HourlySummary]) {
    section_header(out, "HOURLY SPREAD PATTERNS (UTC+2 Broker Time)");
    out.push_str("Hour  | Avg Spread | Min | Max | 90th % | Bars    | Session    | Quality\n");
    out.push_str(&format!("{}\n", table_rule()));
    for h in hours {
        out.push_str(&format!(
            "{:02}:00 | {:10.2} | {:3.0} | {:3.0} | {:6.2} | {:>7} | {:10} | {}\n",
            h.hour,
            h.mean,
            h.min,
            h.max,
            h.p90,
            with_thousands(h.count),
            h.session,
            h.quality
        ));
    }
}

pub fn render_sessions(out: &mut String, sessions: &[SessionSummary]) {
    section_header(out, "TRADING SESSION ANALYSIS");
    for s in sessions {
        out.push_str(&format!("\n{}:\n", s.name));
        out.push_str(&format!("  Avg Spread:    {:6.2} pips\n", s.mean));
        out.push_str(&format!("  Median Spread: {:6.2} pips\n", s.median));
        out.push_str(&format!("  90th %ile:     {:6.2} pips\n", s.p90));
        out.push_str(&format!("  % < 10 pips:   {:6.2}%\n", s.pct_below_tight));
        out.push_str(&format!("  % < 15 pips:   {:6.2}%\n", s.pct_below_loose));
        out.push_str(&format!("  Bars:          {}\n", with_thousands(s.count)));
    }
}

pub fn render_multipliers(out: &mut String, base: f64, recs: &[MultiplierRecommendation]) {
    section_header(out, "OPTIMAL SPREAD MULTIPLIER RECOMMENDATIONS");
    out.push_str(&format!("\nBase MaxSpreadPips = {:.1} pips\n", base));
    out.push_str("\nMultiplier | Max Allowed | % Bars Passing | Recommendation\n");
    out.push_str(&format!("{}\n", table_rule()));
    for r in recs {
        out.push_str(&format!(
            "{:10.1} | {:11.1} | {:14.2}% | {}\n",
            r.multiplier, r.ceiling_pips, r.pass_rate_pct, r.band
        ));
    }
}

pub fn render_actionable(
    out: &mut String,
    rec: &ActionableRecommendation,
    quality_thresholds: &QualityThresholds,
) {
    section_header(out, "ACTIONABLE RECOMMENDATIONS FOR PRODUCTION");
    let base = rec.base_threshold_pips;

    out.push_str("\n1. SPREAD MULTIPLIER SETTING:\n");
    out.push_str(&format!(
        "   Current (testing):  {:.1}x = {:.0} pips max (TOO PERMISSIVE)\n",
        rec.current_multiplier,
        rec.current_multiplier * base
    ));
    for suggestion in [rec.lower, rec.upper].into_iter().flatten() {
        out.push_str(&format!(
            "   Recommended ({:.0}%):   {:.1}x = {:.1} pips max\n",
            suggestion.quantile * 100.0,
            suggestion.multiplier,
            suggestion.spread_pips
        ));
    }
    if rec.lower.is_none() {
        out.push_str(&format!(
            "   Recommended:         n/a (no bars in {})\n",
            rec.prime_window
        ));
    }
    out.push_str(&format!(
        "   Conservative:        {:.1}x = {:.0} pips max (catches prime hours)\n",
        rec.conservative_multiplier,
        rec.conservative_multiplier * base
    ));

    out.push_str("\n2. TRADING HOURS RECOMMENDATION:\n");
    out.push_str(&format!("   PRIME TIME:     {}\n", rec.prime_window));
    out.push_str(&format!(
        "                   Avg spread: {} pips\n",
        optional(rec.prime_mean, 2)
    ));
    out.push_str(&format!("   AVOID:          {}\n", rec.off_hours_window));
    out.push_str(&format!(
        "                   Avg spread: {} pips\n",
        optional(rec.off_hours_mean, 2)
    ));

    out.push_str("\n3. SPREAD THRESHOLD LOGIC:\n");
    for quality in SpreadQuality::iter() {
        // POOR spreads are rejected outright
        let label = match quality {
            SpreadQuality::Poor => "REJECT".to_string(),
            other => other.to_string(),
        };
        out.push_str(&format!(
            "   {:15} {:10} ({})\n",
            format!("{}:", label),
            quality.range_label(quality_thresholds),
            quality.action()
        ));
    }

    out.push_str("\n4. IMPLEMENTATION IN MainTradingEA:\n");
    out.push_str(&format!(
        "   Option A: Use multiplier {:.1}x (simple, covers prime hours)\n",
        rec.conservative_multiplier
    ));
    out.push_str("   Option B: Use time-based logic (complex, optimal)\n");
    out.push_str(&format!(
        "             - Overlap hours: {:.1}x multiplier\n",
        rec.prime_hours_multiplier
    ));
    out.push_str(&format!(
        "             - Other hours:   {:.1}x multiplier\n",
        rec.other_hours_multiplier
    ));
}
