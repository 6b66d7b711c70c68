#![allow(dead_code)]

use std::sync::Mutex;

use ndarray::{Array2, Zip};
use turbid_core::frame::Frame;
use turbid_core::pipeline::{RestorationReporter, RestorationStage};
use turbid_core::restore::degradation::turbulence_transfer;
use turbid_core::restore::RestorationMethod;
use turbid_core::spectrum::{forward_centered, inverse_centered};

pub fn uniform(h: usize, w: usize, value: u8) -> Frame {
    Frame::filled(h, w, value).expect("non-empty")
}

/// Smooth periodic pattern spanning roughly [30, 225].
pub fn smooth_pattern(h: usize, w: usize) -> Frame {
    let data = Array2::from_shape_fn((h, w), |(r, c)| {
        let y = std::f64::consts::TAU * r as f64 / h as f64;
        let x = std::f64::consts::TAU * c as f64 / w as f64;
        127.5 + 60.0 * x.sin() + 37.0 * (2.0 * y).cos()
    });
    Frame::from_f64(&data).expect("non-empty")
}

/// Deterministic pseudo-random 8-bit image (LCG).
pub fn noise_image(h: usize, w: usize, seed: u64) -> Frame {
    let mut state = seed;
    let data = Array2::from_shape_fn((h, w), |_| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 56) as u8
    });
    Frame::new(data).expect("non-empty")
}

pub fn horizontal_ramp(h: usize, w: usize) -> Frame {
    let data = Array2::from_shape_fn((h, w), |(_, c)| (c * 255 / (w - 1)) as u8);
    Frame::new(data).expect("non-empty")
}

/// Apply the turbulence model `G = H * F` in the centered frequency domain.
pub fn degrade(frame: &Frame, k: f64) -> Frame {
    let (h, w) = frame.dim();
    let transfer = turbulence_transfer(h, w, k, 1e-10);
    let mut spectrum = forward_centered(&frame.to_f64());
    Zip::from(&mut spectrum)
        .and(&transfer)
        .for_each(|s, &t| *s *= t);
    Frame::from_f64(&inverse_centered(&spectrum)).expect("non-empty")
}

pub fn max_abs_diff(a: &Frame, b: &Frame) -> u8 {
    Zip::from(a.data())
        .and(b.data())
        .fold(0u8, |acc, &x, &y| acc.max(x.abs_diff(y)))
}

pub fn mean_abs_diff(a: &Frame, b: &Frame) -> f64 {
    let sum = Zip::from(a.data())
        .and(b.data())
        .fold(0.0f64, |acc, &x, &y| acc + x.abs_diff(y) as f64);
    sum / a.data().len() as f64
}

/// Reporter that records every callback.
#[derive(Default)]
pub struct RecordingReporter {
    pub begun: Mutex<Vec<RestorationStage>>,
    pub finished: Mutex<Vec<RestorationStage>>,
    pub degenerate: Mutex<Vec<(RestorationMethod, u8)>>,
}

impl RestorationReporter for RecordingReporter {
    fn begin_stage(&self, stage: RestorationStage) {
        self.begun.lock().unwrap().push(stage);
    }

    fn finish_stage(&self, stage: RestorationStage) {
        self.finished.lock().unwrap().push(stage);
    }

    fn degenerate_output(&self, method: RestorationMethod, fallback: u8) {
        self.degenerate.lock().unwrap().push((method, fallback));
    }
}
