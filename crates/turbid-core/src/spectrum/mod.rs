pub mod fft;

pub use fft::{forward_centered, inverse_centered, log_magnitude};
