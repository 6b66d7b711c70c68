use ndarray::Array2;

use crate::consts::MAX_INTENSITY;
use crate::error::{Result, TurbidError};

/// A single 8-bit grayscale image.
///
/// Always rectangular and non-empty; the invariant is checked once when the
/// frame is built, so every accessor can rely on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Array2<u8>,
}

impl Frame {
    /// Wrap an 8-bit array, rejecting empty shapes.
    pub fn new(data: Array2<u8>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(TurbidError::EmptyImage);
        }
        Ok(Self { data })
    }

    /// Wrap an array whose shape was derived from an existing frame.
    pub(crate) fn from_frame_shaped(data: Array2<u8>) -> Self {
        debug_assert!(data.nrows() > 0 && data.ncols() > 0);
        Self { data }
    }

    /// Sanitize a real-valued grid: round half to even, clip to [0, 255].
    pub fn from_f64(data: &Array2<f64>) -> Result<Self> {
        Self::new(data.mapv(sanitize_sample))
    }

    /// A frame where every sample has the same value.
    pub fn filled(height: usize, width: usize, value: u8) -> Result<Self> {
        Self::new(Array2::from_elem((height, width), value))
    }

    pub fn data(&self) -> &Array2<u8> {
        &self.data
    }

    pub fn into_data(self) -> Array2<u8> {
        self.data
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn to_f64(&self) -> Array2<f64> {
        self.data.mapv(f64::from)
    }

    pub fn mean(&self) -> f64 {
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        sum / self.data.len() as f64
    }

    /// Population variance of the intensities.
    pub fn variance(&self) -> f64 {
        let n = self.data.len() as f64;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for &v in self.data.iter() {
            let v = v as f64;
            sum += v;
            sum_sq += v * v;
        }
        let mean = sum / n;
        (sum_sq / n - mean * mean).max(0.0)
    }
}

/// Round half to even and clip into the 8-bit range.
pub fn sanitize_sample(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, MAX_INTENSITY) as u8
}
