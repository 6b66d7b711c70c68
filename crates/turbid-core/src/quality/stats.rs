use crate::frame::Frame;
use crate::pipeline::RestorationResults;

/// Mean intensity of every image involved in one restoration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntensityStatistics {
    pub original_mean: f64,
    pub degraded_mean: f64,
    pub inverse_mean: f64,
    pub wiener_mean: f64,
}

pub fn collect_intensity_statistics(
    results: &RestorationResults,
    original: &Frame,
    degraded: &Frame,
) -> IntensityStatistics {
    IntensityStatistics {
        original_mean: original.mean(),
        degraded_mean: degraded.mean(),
        inverse_mean: results.inverse_filtered().mean(),
        wiener_mean: results.wiener_filtered().mean(),
    }
}

impl std::fmt::Display for IntensityStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Means: orig={:.1}, deg={:.1}, inv={:.1}, wien={:.1}",
            self.original_mean, self.degraded_mean, self.inverse_mean, self.wiener_mean
        )
    }
}
