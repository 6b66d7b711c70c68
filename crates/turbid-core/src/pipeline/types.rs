use ndarray::Array2;

use crate::error::{Result, TurbidError};
use crate::frame::Frame;
use crate::restore::RestorationMethod;

/// Restoration stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestorationStage {
    InverseFilter,
    WienerFilter,
    Packaging,
    Statistics,
}

impl std::fmt::Display for RestorationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InverseFilter => write!(f, "Inverse filtering"),
            Self::WienerFilter => write!(f, "Wiener filtering"),
            Self::Packaging => write!(f, "Packaging results"),
            Self::Statistics => write!(f, "Computing statistics"),
        }
    }
}

/// Thread-safe observer for restoration progress and diagnostics.
///
/// All methods have default no-op implementations. Both operators may
/// report concurrently.
pub trait RestorationReporter: Send + Sync {
    fn begin_stage(&self, _stage: RestorationStage) {}

    fn finish_stage(&self, _stage: RestorationStage) {}

    /// An operator's output was flat and replaced with a constant frame.
    fn degenerate_output(&self, _method: RestorationMethod, _fallback: u8) {}
}

/// Reporter that ignores everything.
pub struct NoOpReporter;
impl RestorationReporter for NoOpReporter {}

/// The two restored images for one degraded input.
///
/// Both are non-empty 8-bit grayscale frames of identical shape; checked
/// once here and never again.
#[derive(Clone, Debug)]
pub struct RestorationResults {
    inverse_filtered: Frame,
    wiener_filtered: Frame,
}

impl RestorationResults {
    pub fn new(inverse_filtered: Frame, wiener_filtered: Frame) -> Result<Self> {
        if inverse_filtered.dim() != wiener_filtered.dim() {
            return Err(TurbidError::ShapeMismatch {
                context: "restoration results",
                left: inverse_filtered.dim(),
                right: wiener_filtered.dim(),
            });
        }
        Ok(Self {
            inverse_filtered,
            wiener_filtered,
        })
    }

    /// Validate raw arrays, e.g. from an external implementation.
    pub fn from_arrays(inverse_filtered: Array2<u8>, wiener_filtered: Array2<u8>) -> Result<Self> {
        Self::new(Frame::new(inverse_filtered)?, Frame::new(wiener_filtered)?)
    }

    pub fn inverse_filtered(&self) -> &Frame {
        &self.inverse_filtered
    }

    pub fn wiener_filtered(&self) -> &Frame {
        &self.wiener_filtered
    }

    pub fn get(&self, method: RestorationMethod) -> &Frame {
        match method {
            RestorationMethod::InverseFilter => &self.inverse_filtered,
            RestorationMethod::Wiener => &self.wiener_filtered,
        }
    }

    /// (rows, cols) shared by both images.
    pub fn dim(&self) -> (usize, usize) {
        self.inverse_filtered.dim()
    }
}
