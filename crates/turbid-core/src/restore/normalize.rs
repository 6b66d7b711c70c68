use ndarray::Array2;

use crate::consts::{
    FLAT_RANGE_TOLERANCE, MAX_INTENSITY, NORMALIZE_HIGH_PERCENTILE, NORMALIZE_LOW_PERCENTILE,
};
use crate::frame::sanitize_sample;

/// Value at quantile `q` (in [0.0, 1.0]) of an ascending slice, nearest rank.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    let idx = ((n - 1) as f64 * q.clamp(0.0, 1.0)).round() as usize;
    sorted[idx.min(n - 1)]
}

/// 1st and 99th percentile of every sample in `data`.
pub fn percentile_bounds(data: &Array2<f64>) -> (f64, f64) {
    let mut sorted: Vec<f64> = data.iter().copied().collect();
    sorted.sort_unstable_by(f64::total_cmp);
    (
        percentile(&sorted, NORMALIZE_LOW_PERCENTILE),
        percentile(&sorted, NORMALIZE_HIGH_PERCENTILE),
    )
}

/// Linearly map `[p1, p99]` onto `[0, 255]`, clipping outliers.
///
/// Returns `None` when the percentile spread is within
/// [`FLAT_RANGE_TOLERANCE`]: a flat field has no contrast to stretch.
pub fn percentile_normalize(data: &Array2<f64>) -> Option<Array2<u8>> {
    if data.is_empty() {
        return None;
    }
    let (low, high) = percentile_bounds(data);
    let range = high - low;
    if range.is_nan() || range <= FLAT_RANGE_TOLERANCE {
        return None;
    }

    let scale = MAX_INTENSITY / range;
    Some(data.mapv(|v| sanitize_sample((v - low) * scale)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_of_hundred_and_one_values() {
        let sorted: Vec<f64> = (0..=100).map(f64::from).collect();
        assert_eq!(percentile(&sorted, 0.01), 1.0);
        assert_eq!(percentile(&sorted, 0.99), 99.0);
        assert_eq!(percentile(&sorted, 0.0), 0.0);
        assert_eq!(percentile(&sorted, 1.0), 100.0);
    }

    #[test]
    fn single_sample_is_flat() {
        let data = Array2::from_elem((1, 1), 42.0);
        assert!(percentile_normalize(&data).is_none());
    }
}
