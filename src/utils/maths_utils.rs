use argminmax::ArgMinMax;
use statrs::statistics::Statistics;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(vec: &[f64]) -> f64 {
    vec.iter().mean()
}

/// Sample standard deviation (n - 1 denominator). NaN for fewer than two values.
pub fn sample_std_dev(vec: &[f64]) -> f64 {
    vec.iter().std_dev()
}

/// Returns a sorted copy, NaNs last.
pub fn sorted(vec: &[f64]) -> Vec<f64> {
    let mut out = vec.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// Linear-interpolated quantile of an already sorted slice.
/// `fraction` is clamped to `0.0..=1.0`; an empty slice yields 0.0.
pub fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    if sorted.len() == 1 {
        return sorted[0];
    }

    let clamped = fraction.clamp(0.0, 1.0);
    let max_index = (sorted.len() - 1) as f64;
    let position = clamped * max_index;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = position - lower as f64;
        sorted[lower] + (sorted[upper] - sorted[lower]) * weight
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_dp(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// `part / total` as a percentage. 0.0 when `total` is zero.
pub fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Percentage of `values` satisfying `pred`.
pub fn pct_where<F>(values: &[f64], pred: F) -> f64
where
    F: Fn(f64) -> bool,
{
    let hits = values.iter().filter(|&&v| pred(v)).count();
    pct(hits, values.len())
}
