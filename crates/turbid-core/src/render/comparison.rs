use std::path::Path;

use image::{imageops, GrayImage, Luma};

use crate::consts::{FIGURE_GUTTER, MAX_INTENSITY};
use crate::error::{Result, TurbidError};
use crate::frame::{sanitize_sample, Frame};
use crate::io::image_io::{save_gray_image, to_gray_image};
use crate::pipeline::RestorationResults;
use crate::spectrum::{forward_centered, log_magnitude};

/// Lay `panels` out left to right on a white canvas, top-aligned, with a
/// [`FIGURE_GUTTER`] margin around and between them.
pub fn comparison_figure(panels: &[&Frame]) -> Result<GrayImage> {
    if panels.is_empty() {
        return Err(TurbidError::EmptyImage);
    }

    let gutter = FIGURE_GUTTER;
    let max_height = panels.iter().map(|p| p.height() as u32).max().unwrap_or(0);
    let total_width: u32 = panels.iter().map(|p| p.width() as u32).sum::<u32>()
        + gutter * (panels.len() as u32 + 1);
    let mut canvas = GrayImage::from_pixel(total_width, max_height + 2 * gutter, Luma([255]));

    let mut x = gutter;
    for panel in panels {
        let img = to_gray_image(panel)?;
        imageops::replace(&mut canvas, &img, x as i64, gutter as i64);
        x += img.width() + gutter;
    }

    Ok(canvas)
}

/// Original | degraded | inverse filter | Wiener filter, saved to `path`.
pub fn save_comparison_figure(
    original: &Frame,
    degraded: &Frame,
    results: &RestorationResults,
    path: &Path,
) -> Result<()> {
    let figure = comparison_figure(&[
        original,
        degraded,
        results.inverse_filtered(),
        results.wiener_filtered(),
    ])?;
    save_gray_image(&figure, path)
}

/// `ln(1 + |F|)` of the centered spectrum, min/max scaled to 8 bits.
pub fn spectrum_frame(frame: &Frame) -> Frame {
    let magnitude = log_magnitude(&forward_centered(&frame.to_f64()));
    let (min, max) = magnitude
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    let scaled = if range > 0.0 {
        magnitude.mapv(|v| sanitize_sample((v - min) / range * MAX_INTENSITY))
    } else {
        magnitude.mapv(|_| 0)
    };
    Frame::from_frame_shaped(scaled)
}

pub fn save_spectrum(frame: &Frame, path: &Path) -> Result<()> {
    save_gray_image(&to_gray_image(&spectrum_frame(frame))?, path)
}
