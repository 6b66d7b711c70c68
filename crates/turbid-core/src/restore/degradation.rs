use ndarray::{Array2, ArrayViewMut1, Axis};
use rayon::prelude::*;

use crate::consts::{PARALLEL_PIXEL_THRESHOLD, TURBULENCE_EXPONENT};

/// Centered frequency coordinates of `[row, col]`: `u = col - cols / 2`,
/// `v = row - rows / 2`, matching the layout produced by `fftshift`.
pub fn centered_coordinates(row: usize, col: usize, rows: usize, cols: usize) -> (f64, f64) {
    let u = col as f64 - cols as f64 / 2.0;
    let v = row as f64 - rows as f64 / 2.0;
    (u, v)
}

/// Atmospheric-turbulence transfer function over a centered grid:
///
/// `H(u, v) = exp(-k * (u^2 + v^2)^(5/6))`
///
/// `u^2 + v^2` is floored at `origin_epsilon` so the origin never evaluates
/// `0^(5/6)`.
pub fn turbulence_transfer(rows: usize, cols: usize, k: f64, origin_epsilon: f64) -> Array2<f64> {
    centered_grid(rows, cols, |u, v| {
        let distance_sq = (u * u + v * v).max(origin_epsilon);
        (-k * distance_sq.powf(TURBULENCE_EXPONENT)).exp()
    })
}

/// Smooth circular low-pass taper `exp(-D^2 / (2 * radius^2))`.
pub fn gaussian_lowpass(rows: usize, cols: usize, cutoff_radius: f64) -> Array2<f64> {
    let denom = 2.0 * cutoff_radius * cutoff_radius;
    centered_grid(rows, cols, |u, v| (-(u * u + v * v) / denom).exp())
}

/// Evaluate `f(u, v)` at every cell of a `rows x cols` centered grid.
fn centered_grid<F>(rows: usize, cols: usize, f: F) -> Array2<f64>
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let mut grid = Array2::<f64>::zeros((rows, cols));
    let fill_row = |(row, mut lane): (usize, ArrayViewMut1<f64>)| {
        for (col, value) in lane.iter_mut().enumerate() {
            let (u, v) = centered_coordinates(row, col, rows, cols);
            *value = f(u, v);
        }
    };

    if rows * cols >= PARALLEL_PIXEL_THRESHOLD {
        grid.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(fill_row);
    } else {
        grid.axis_iter_mut(Axis(0)).enumerate().for_each(fill_row);
    }

    grid
}
