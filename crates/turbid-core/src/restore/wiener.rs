use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::{FALLBACK_SIGNAL_VARIANCE, MIN_SIGNAL_VARIANCE, WIENER_ORIGIN_EPSILON};
use crate::error::{Result, TurbidError};
use crate::frame::Frame;

use super::degradation::turbulence_transfer;
use super::{FrequencyFilter, RestorationMethod};

/// Signal variance used for the noise-to-signal ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalVariance {
    /// Estimate from the degraded image's intensity variance.
    #[default]
    Auto,
    Fixed(f64),
}

impl std::fmt::Display for SignalVariance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Fixed(v) => write!(f, "{v:.1}"),
        }
    }
}

/// Wiener (MMSE) deconvolution with a constant noise-to-signal ratio:
///
/// `W(u, v) = H*(u, v) / (|H(u, v)|^2 + NSR)`
///
/// `H` is real here, so `H* = H`.
#[derive(Clone, Debug, PartialEq)]
pub struct WienerFilter {
    k: f64,
    noise_variance: f64,
    signal_variance: SignalVariance,
}

impl WienerFilter {
    pub fn new(k: f64, noise_variance: f64, signal_variance: SignalVariance) -> Result<Self> {
        if k.is_nan() || k < 0.0 {
            return Err(TurbidError::InvalidParameter {
                name: "k",
                value: k,
                reason: "degradation strength must be non-negative",
            });
        }
        if noise_variance.is_nan() || noise_variance < 0.0 {
            return Err(TurbidError::InvalidParameter {
                name: "noise_variance",
                value: noise_variance,
                reason: "noise variance must be non-negative",
            });
        }
        if let SignalVariance::Fixed(v) = signal_variance {
            if v.is_nan() || v <= 0.0 {
                return Err(TurbidError::InvalidParameter {
                    name: "signal_variance",
                    value: v,
                    reason: "signal variance must be positive",
                });
            }
        }

        info!(
            k,
            noise_variance,
            signal_variance = %signal_variance,
            "Wiener filter initialized"
        );
        Ok(Self {
            k,
            noise_variance,
            signal_variance,
        })
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn noise_variance(&self) -> f64 {
        self.noise_variance
    }

    pub fn signal_variance(&self) -> SignalVariance {
        self.signal_variance
    }

    /// Noise-to-signal ratio for `frame`, resolving `Auto` from its variance.
    pub fn noise_to_signal_ratio(&self, frame: &Frame) -> f64 {
        let signal_var = match self.signal_variance {
            SignalVariance::Fixed(v) => v,
            SignalVariance::Auto => {
                let v = frame.variance();
                if v < MIN_SIGNAL_VARIANCE {
                    FALLBACK_SIGNAL_VARIANCE
                } else {
                    v
                }
            }
        };

        let nsr = self.noise_variance / signal_var;
        debug!(
            nsr,
            noise_variance = self.noise_variance,
            signal_variance = signal_var,
            "Estimated NSR"
        );
        nsr
    }
}

impl FrequencyFilter for WienerFilter {
    fn method(&self) -> RestorationMethod {
        RestorationMethod::Wiener
    }

    fn frequency_response(&self, frame: &Frame) -> Array2<f64> {
        let (rows, cols) = frame.dim();
        let nsr = self.noise_to_signal_ratio(frame);
        let mut response = turbulence_transfer(rows, cols, self.k, WIENER_ORIGIN_EPSILON);
        response.mapv_inplace(|h| {
            let denom = h * h + nsr;
            // H underflows to 0 for huge k; with nsr == 0 that would be 0/0.
            if denom > 0.0 {
                h / denom
            } else {
                0.0
            }
        });
        response
    }
}

/// Build a [`WienerFilter`] and apply it in one call.
pub fn apply_wiener_filter(
    frame: &Frame,
    k: f64,
    noise_variance: f64,
    signal_variance: SignalVariance,
) -> Result<Frame> {
    Ok(WienerFilter::new(k, noise_variance, signal_variance)?.apply(frame))
}
