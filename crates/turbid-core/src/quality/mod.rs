pub mod psnr;
pub mod stats;

pub use psnr::{mean_squared_error, psnr};
pub use stats::{collect_intensity_statistics, IntensityStatistics};
