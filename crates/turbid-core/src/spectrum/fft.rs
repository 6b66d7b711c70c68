use std::sync::Arc;

use ndarray::{Array2, Axis};
use num_complex::Complex;
use rayon::prelude::*;
use rustfft::{Fft, FftPlanner};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Forward 2D DFT of a real grid followed by a quadrant shift, so the zero
/// frequency sits at `(rows / 2, cols / 2)`.
pub fn forward_centered(data: &Array2<f64>) -> Array2<Complex<f64>> {
    fftshift(&fft2d(data))
}

/// Undo the quadrant shift, apply the inverse 2D DFT and keep the real part.
pub fn inverse_centered(spectrum: &Array2<Complex<f64>>) -> Array2<f64> {
    ifft2d(&ifftshift(spectrum)).mapv(|c| c.re)
}

/// `ln(1 + |F|)` of a spectrum, for display.
pub fn log_magnitude(spectrum: &Array2<Complex<f64>>) -> Array2<f64> {
    spectrum.mapv(|c| c.norm().ln_1p())
}

/// Unnormalized forward 2D DFT (rows, then columns).
pub fn fft2d(data: &Array2<f64>) -> Array2<Complex<f64>> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let fft_row = planner.plan_fft_forward(w);
    let fft_col = planner.plan_fft_forward(h);

    let mut work = data.mapv(|v| Complex::new(v, 0.0));
    let parallel = h * w >= PARALLEL_PIXEL_THRESHOLD;
    transform_lanes(&mut work, &fft_row, Axis(0), parallel);
    transform_lanes(&mut work, &fft_col, Axis(1), parallel);
    work
}

/// Inverse 2D DFT scaled by `1 / (h * w)` (columns, then rows).
pub fn ifft2d(data: &Array2<Complex<f64>>) -> Array2<Complex<f64>> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let ifft_row = planner.plan_fft_inverse(w);
    let ifft_col = planner.plan_fft_inverse(h);

    let mut work = data.clone();
    let parallel = h * w >= PARALLEL_PIXEL_THRESHOLD;
    transform_lanes(&mut work, &ifft_col, Axis(1), parallel);
    transform_lanes(&mut work, &ifft_row, Axis(0), parallel);

    let scale = 1.0 / (h * w) as f64;
    work.mapv_inplace(|c| c * scale);
    work
}

/// Run `fft` over every lane obtained by iterating along `axis`:
/// `Axis(0)` visits rows, `Axis(1)` visits columns.
fn transform_lanes(
    work: &mut Array2<Complex<f64>>,
    fft: &Arc<dyn Fft<f64>>,
    axis: Axis,
    parallel: bool,
) {
    let process = |mut lane: ndarray::ArrayViewMut1<Complex<f64>>| {
        let mut buffer = lane.to_vec();
        fft.process(&mut buffer);
        for (dst, src) in lane.iter_mut().zip(buffer) {
            *dst = src;
        }
    };

    if parallel {
        work.axis_iter_mut(axis).into_par_iter().for_each(process);
    } else {
        work.axis_iter_mut(axis).for_each(process);
    }
}

/// Move the zero-frequency bin from `[0, 0]` to `[h / 2, w / 2]`.
pub fn fftshift<T: Copy>(data: &Array2<T>) -> Array2<T> {
    let (h, w) = data.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        data[[(row + h - h / 2) % h, (col + w - w / 2) % w]]
    })
}

/// Exact inverse of [`fftshift`], including odd dimensions.
pub fn ifftshift<T: Copy>(data: &Array2<T>) -> Array2<T> {
    let (h, w) = data.dim();
    Array2::from_shape_fn((h, w), |(row, col)| data[[(row + h / 2) % h, (col + w / 2) % w]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_origin_to_center() {
        let mut data = Array2::<f64>::zeros((6, 4));
        data[[0, 0]] = 1.0;
        let shifted = fftshift(&data);
        assert_eq!(shifted[[3, 2]], 1.0);
    }

    #[test]
    fn ifftshift_inverts_odd_sizes() {
        let data = Array2::from_shape_fn((5, 7), |(r, c)| (r * 7 + c) as f64);
        assert_eq!(ifftshift(&fftshift(&data)), data);
    }

    #[test]
    fn dc_bin_is_sum() {
        let data = Array2::from_elem((4, 8), 2.0);
        let spectrum = fft2d(&data);
        assert!((spectrum[[0, 0]].re - 64.0).abs() < 1e-9);
        assert!(spectrum[[1, 3]].norm() < 1e-9);
    }
}
