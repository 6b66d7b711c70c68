/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Maximum 8-bit intensity, used for normalization and PSNR.
pub const MAX_INTENSITY: f64 = 255.0;

/// Exponent applied to u^2 + v^2 in the turbulence transfer function.
pub const TURBULENCE_EXPONENT: f64 = 5.0 / 6.0;

/// Tikhonov-style term added to |H|^2 in the regularized inverse filter.
pub const INVERSE_REGULARIZATION: f64 = 0.01;

/// Floor for u^2 + v^2 at the spectrum origin in the Wiener transfer function.
pub const WIENER_ORIGIN_EPSILON: f64 = 1e-10;

/// Signal variance below this is treated as "no signal" when estimating the NSR.
pub const MIN_SIGNAL_VARIANCE: f64 = 1e-6;

/// Signal variance substituted when the estimate falls below [`MIN_SIGNAL_VARIANCE`].
pub const FALLBACK_SIGNAL_VARIANCE: f64 = 1.0;

/// Lower percentile mapped to 0 by the output normalizer.
pub const NORMALIZE_LOW_PERCENTILE: f64 = 0.01;

/// Upper percentile mapped to 255 by the output normalizer.
pub const NORMALIZE_HIGH_PERCENTILE: f64 = 0.99;

/// Percentile spread (in intensity units) at or below which a result counts as flat.
pub const FLAT_RANGE_TOLERANCE: f64 = 1e-6;

/// MSE below this is reported as an infinite PSNR.
pub const PSNR_MSE_FLOOR: f64 = 1e-10;

/// Default degradation strength `k`.
pub const DEFAULT_K: f64 = 0.0025;

/// Default Gaussian taper radius for the inverse filter.
pub const DEFAULT_INVERSE_CUTOFF_RADIUS: f64 = 50.0;

/// Default origin clamp for the inverse filter's transfer function.
pub const DEFAULT_INVERSE_EPSILON: f64 = 1e-6;

/// Default noise variance (Gaussian noise with sigma = 10).
pub const DEFAULT_NOISE_VARIANCE: f64 = 100.0;

/// File extensions accepted by the image directory loader.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["bmp", "png", "jpg", "jpeg", "tif", "tiff"];

/// Filename fragments that mark an image as the degraded member of a pair.
pub const DEGRADED_NAME_MARKERS: [&str; 4] = ["degraded", "degradation", "noise", "blur"];

/// Gutter between panels of a comparison figure, in pixels.
pub const FIGURE_GUTTER: u32 = 16;
