use ndarray::Array2;
use turbid_core::restore::normalize::{percentile_bounds, percentile_normalize};

fn ramp_0_to_100() -> Array2<f64> {
    Array2::from_shape_fn((1, 101), |(_, c)| c as f64)
}

#[test]
fn percentiles_map_to_range_ends() {
    let out = percentile_normalize(&ramp_0_to_100()).expect("ramp has contrast");
    assert_eq!(out[[0, 1]], 0);
    assert_eq!(out[[0, 99]], 255);
    // (50 - 1) * 255 / 98 sits on the rounding boundary.
    assert!((127..=128).contains(&out[[0, 50]]));
}

#[test]
fn values_outside_percentiles_are_clipped() {
    let out = percentile_normalize(&ramp_0_to_100()).unwrap();
    assert_eq!(out[[0, 0]], 0);
    assert_eq!(out[[0, 100]], 255);
}

#[test]
fn bounds_follow_nearest_rank() {
    let (low, high) = percentile_bounds(&ramp_0_to_100());
    assert_eq!(low, 1.0);
    assert_eq!(high, 99.0);
}

#[test]
fn single_outlier_does_not_compress_contrast() {
    let mut data = Array2::from_shape_fn((20, 20), |(r, c)| ((r * 20 + c) % 100) as f64);
    data[[0, 0]] = 1e9;
    let out = percentile_normalize(&data).unwrap();
    assert_eq!(out[[0, 0]], 255);
    // Interior samples still spread across the range.
    let mid = out.iter().filter(|&&v| v > 50 && v < 200).count();
    assert!(mid > 100, "only {mid} mid-range samples");
}

#[test]
fn unordered_input_is_handled() {
    let data = Array2::from_shape_vec((2, 3), vec![5.0, -3.0, 12.0, 0.5, 7.0, -1.0]).unwrap();
    let out = percentile_normalize(&data).unwrap();
    assert_eq!(out[[0, 1]], 0);
    assert_eq!(out[[0, 2]], 255);
}

#[test]
fn flat_input_has_no_normalization() {
    let data = Array2::from_elem((16, 16), 3.25);
    assert!(percentile_normalize(&data).is_none());
}

#[test]
fn roundoff_noise_counts_as_flat() {
    let data = Array2::from_shape_fn((8, 8), |(r, c)| 128.0 + ((r + c) % 2) as f64 * 1e-9);
    assert!(percentile_normalize(&data).is_none());
}

#[test]
fn negative_values_are_supported() {
    let data = Array2::from_shape_fn((1, 101), |(_, c)| c as f64 - 200.0);
    let out = percentile_normalize(&data).unwrap();
    assert_eq!(out[[0, 1]], 0);
    assert_eq!(out[[0, 99]], 255);
}
