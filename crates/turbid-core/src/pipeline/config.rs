use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_INVERSE_CUTOFF_RADIUS, DEFAULT_INVERSE_EPSILON, DEFAULT_K, DEFAULT_NOISE_VARIANCE,
};
use crate::error::Result;
use crate::restore::{InverseFilter, SignalVariance, WienerFilter};

/// Parameters shared by both restoration operators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestorationParameters {
    /// Degradation strength in `H(u, v) = exp(-k * (u^2 + v^2)^(5/6))`.
    pub k: f64,
    /// Radius of the inverse filter's Gaussian pass band.
    pub inverse_cutoff_radius: f64,
    /// Floor for `u^2 + v^2` at the origin in the inverse filter.
    pub inverse_epsilon: f64,
    /// Additive noise variance assumed by the Wiener filter.
    pub noise_variance: f64,
    pub signal_variance: SignalVariance,
}

impl Default for RestorationParameters {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            inverse_cutoff_radius: DEFAULT_INVERSE_CUTOFF_RADIUS,
            inverse_epsilon: DEFAULT_INVERSE_EPSILON,
            noise_variance: DEFAULT_NOISE_VARIANCE,
            signal_variance: SignalVariance::Auto,
        }
    }
}

impl RestorationParameters {
    pub fn inverse_filter(&self) -> Result<InverseFilter> {
        InverseFilter::new(self.k, self.inverse_cutoff_radius, self.inverse_epsilon)
    }

    pub fn wiener_filter(&self) -> Result<WienerFilter> {
        WienerFilter::new(self.k, self.noise_variance, self.signal_variance)
    }

    /// Check every bound without building anything else.
    pub fn validate(&self) -> Result<()> {
        self.inverse_filter()?;
        self.wiener_filter()?;
        Ok(())
    }

    /// One-line description for logs and figure captions.
    pub fn summary(&self) -> String {
        format!(
            "Degradation: H(u,v)=exp(-k*(u^2+v^2)^(5/6)), k={:.6} | \
             Inverse: cutoff={:.1}, eps={:.2e} | \
             Wiener: noise_var={:.1}, signal_var={}",
            self.k,
            self.inverse_cutoff_radius,
            self.inverse_epsilon,
            self.noise_variance,
            self.signal_variance
        )
    }
}

impl std::fmt::Display for RestorationParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// Batch run over a directory of original/degraded image pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default = "default_save_figures")]
    pub save_figures: bool,
    #[serde(default)]
    pub restoration: RestorationParameters,
}

fn default_save_figures() -> bool {
    true
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("test_image"),
            output_dir: PathBuf::from("results"),
            save_figures: true,
            restoration: RestorationParameters::default(),
        }
    }
}
