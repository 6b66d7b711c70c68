use ndarray::Zip;

use crate::consts::{MAX_INTENSITY, PSNR_MSE_FLOOR};
use crate::error::{Result, TurbidError};
use crate::frame::Frame;

/// Mean of `(reference - restored)^2` over all pixels.
pub fn mean_squared_error(reference: &Frame, restored: &Frame) -> Result<f64> {
    if reference.dim() != restored.dim() {
        return Err(TurbidError::ShapeMismatch {
            context: "PSNR",
            left: reference.dim(),
            right: restored.dim(),
        });
    }

    let sum = Zip::from(reference.data())
        .and(restored.data())
        .fold(0.0f64, |acc, &a, &b| {
            let diff = a as f64 - b as f64;
            acc + diff * diff
        });
    Ok(sum / reference.data().len() as f64)
}

/// Peak signal-to-noise ratio in dB; `f64::INFINITY` for identical images.
pub fn psnr(reference: &Frame, restored: &Frame) -> Result<f64> {
    let mse = mean_squared_error(reference, restored)?;
    if mse < PSNR_MSE_FLOOR {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (MAX_INTENSITY * MAX_INTENSITY / mse).log10())
}
