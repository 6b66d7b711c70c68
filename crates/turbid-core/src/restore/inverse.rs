use ndarray::{Array2, Zip};
use tracing::info;

use crate::consts::INVERSE_REGULARIZATION;
use crate::error::{Result, TurbidError};
use crate::frame::Frame;

use super::degradation::{gaussian_lowpass, turbulence_transfer};
use super::{FrequencyFilter, RestorationMethod};

/// Regularized inverse filter limited to a Gaussian pass band.
///
/// Inside the pass band the degraded spectrum is multiplied by
/// `H / (|H|^2 + alpha)`; outside it the spectrum passes through unchanged,
/// so high frequencies where `H` is tiny are never amplified:
///
/// `F = G * (R * L + (1 - L))`
#[derive(Clone, Debug, PartialEq)]
pub struct InverseFilter {
    k: f64,
    cutoff_radius: f64,
    epsilon: f64,
}

impl InverseFilter {
    /// Validate parameters up front; nothing is computed here.
    pub fn new(k: f64, cutoff_radius: f64, epsilon: f64) -> Result<Self> {
        if k.is_nan() || k < 0.0 {
            return Err(TurbidError::InvalidParameter {
                name: "k",
                value: k,
                reason: "degradation strength must be non-negative",
            });
        }
        if cutoff_radius.is_nan() || cutoff_radius <= 0.0 {
            return Err(TurbidError::InvalidParameter {
                name: "inverse_cutoff_radius",
                value: cutoff_radius,
                reason: "cutoff radius must be positive",
            });
        }
        if epsilon.is_nan() || epsilon <= 0.0 {
            return Err(TurbidError::InvalidParameter {
                name: "inverse_epsilon",
                value: epsilon,
                reason: "epsilon must be positive",
            });
        }

        info!(k, cutoff_radius, epsilon, "Inverse filter initialized");
        Ok(Self {
            k,
            cutoff_radius,
            epsilon,
        })
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn cutoff_radius(&self) -> f64 {
        self.cutoff_radius
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl FrequencyFilter for InverseFilter {
    fn method(&self) -> RestorationMethod {
        RestorationMethod::InverseFilter
    }

    fn frequency_response(&self, frame: &Frame) -> Array2<f64> {
        let (rows, cols) = frame.dim();
        let transfer = turbulence_transfer(rows, cols, self.k, self.epsilon);
        let lowpass = gaussian_lowpass(rows, cols, self.cutoff_radius);
        combined_response(&transfer, &lowpass)
    }
}

/// `R * L + (1 - L)` with `R = H / (|H|^2 + alpha)`.
pub fn combined_response(transfer: &Array2<f64>, lowpass: &Array2<f64>) -> Array2<f64> {
    Zip::from(transfer).and(lowpass).map_collect(|&h, &l| {
        let regularized = h / (h * h + INVERSE_REGULARIZATION);
        regularized * l + (1.0 - l)
    })
}

/// Build an [`InverseFilter`] and apply it in one call.
pub fn apply_inverse_filter(
    frame: &Frame,
    k: f64,
    cutoff_radius: f64,
    epsilon: f64,
) -> Result<Frame> {
    Ok(InverseFilter::new(k, cutoff_radius, epsilon)?.apply(frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_taper_is_pure_regularized_inverse() {
        let transfer = Array2::from_elem((2, 2), 1.0);
        let lowpass = Array2::from_elem((2, 2), 1.0);
        let response = combined_response(&transfer, &lowpass);
        assert!((response[[0, 0]] - 1.0 / 1.01).abs() < 1e-12);
    }

    #[test]
    fn zero_taper_passes_spectrum_through() {
        let transfer = Array2::from_elem((2, 2), 1e-9);
        let lowpass = Array2::zeros((2, 2));
        let response = combined_response(&transfer, &lowpass);
        assert!(response.iter().all(|&r| (r - 1.0).abs() < 1e-12));
    }
}
