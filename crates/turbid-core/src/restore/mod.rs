pub mod degradation;
pub mod inverse;
pub mod normalize;
pub mod wiener;

use ndarray::{Array2, Zip};
use tracing::{debug, warn};

use crate::frame::{sanitize_sample, Frame};
use crate::pipeline::types::{NoOpReporter, RestorationReporter};
use crate::spectrum::{forward_centered, inverse_centered};

pub use inverse::{apply_inverse_filter, InverseFilter};
pub use wiener::{apply_wiener_filter, SignalVariance, WienerFilter};

/// Which restoration operator produced an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RestorationMethod {
    InverseFilter,
    Wiener,
}

impl std::fmt::Display for RestorationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InverseFilter => write!(f, "Inverse Filter"),
            Self::Wiener => write!(f, "Wiener Filter"),
        }
    }
}

/// A restoration operator expressed as a real-valued filter over the
/// centered spectrum of the degraded image.
pub trait FrequencyFilter {
    fn method(&self) -> RestorationMethod;

    /// Filter response, same shape as `frame`, indexed in centered (u, v).
    fn frequency_response(&self, frame: &Frame) -> Array2<f64>;

    fn apply(&self, frame: &Frame) -> Frame {
        self.apply_reported(frame, &NoOpReporter)
    }

    fn apply_reported(&self, frame: &Frame, reporter: &dyn RestorationReporter) -> Frame {
        let response = self.frequency_response(frame);
        restore_with_response(frame, &response, self.method(), reporter)
    }
}

/// DFT -> multiply by `response` -> inverse DFT -> percentile normalize.
///
/// A flat result falls back to a constant frame at the degraded image's mean.
pub fn restore_with_response(
    frame: &Frame,
    response: &Array2<f64>,
    method: RestorationMethod,
    reporter: &dyn RestorationReporter,
) -> Frame {
    let mut spectrum = forward_centered(&frame.to_f64());
    Zip::from(&mut spectrum)
        .and(response)
        .for_each(|s, &r| *s *= r);
    let restored = inverse_centered(&spectrum);

    match normalize::percentile_normalize(&restored) {
        Some(data) => {
            debug!(method = %method, "Restoration completed");
            Frame::from_frame_shaped(data)
        }
        None => {
            let fallback = sanitize_sample(frame.mean());
            warn!(
                method = %method,
                fallback,
                "Restoration produced near-constant output"
            );
            reporter.degenerate_output(method, fallback);
            let (h, w) = frame.dim();
            Frame::from_frame_shaped(Array2::from_elem((h, w), fallback))
        }
    }
}
