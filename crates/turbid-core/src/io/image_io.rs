use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};
use ndarray::Array2;
use tracing::{debug, info, warn};

use crate::consts::SUPPORTED_EXTENSIONS;
use crate::error::{Result, TurbidError};
use crate::frame::Frame;

/// Load an image file as 8-bit grayscale (color input is converted to luma).
pub fn load_image(path: &Path) -> Result<Frame> {
    let gray = image::open(path)?.to_luma8();
    let (w, h) = gray.dimensions();
    let data = Array2::from_shape_vec((h as usize, w as usize), gray.into_raw())
        .map_err(|_| TurbidError::InvalidDimensions {
            width: w,
            height: h,
        })?;
    let frame = Frame::new(data)?;
    debug!(path = %path.display(), width = w, height = h, "Loaded image");
    Ok(frame)
}

/// Copy a frame into an `image` buffer.
pub fn to_gray_image(frame: &Frame) -> Result<GrayImage> {
    let (h, w) = frame.dim();
    GrayImage::from_raw(w as u32, h as u32, frame.data().iter().copied().collect()).ok_or(
        TurbidError::InvalidDimensions {
            width: w as u32,
            height: h as u32,
        },
    )
}

/// Save a frame as 8-bit grayscale, choosing the format from the extension
/// (BMP when unknown). Parent directories are created as needed.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    save_gray_image(&to_gray_image(frame)?, path)
}

/// Save an `image` buffer with the same format and directory rules as [`save_image`].
pub fn save_gray_image(img: &GrayImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    img.save_with_format(path, format_for(path))?;
    debug!(path = %path.display(), "Saved image");
    Ok(())
}

fn format_for(path: &Path) -> ImageFormat {
    match extension_lowercase(path).as_deref() {
        Some("png") => ImageFormat::Png,
        Some("tif" | "tiff") => ImageFormat::Tiff,
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        _ => ImageFormat::Bmp,
    }
}

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Whether `path` has one of the supported image extensions.
pub fn is_supported_image(path: &Path) -> bool {
    extension_lowercase(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Sorted file names of every supported image directly under `dir`.
pub fn list_images(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !is_supported_image(&path) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();

    if names.is_empty() {
        warn!(dir = %dir.display(), "No supported image files found");
    } else {
        info!(count = names.len(), dir = %dir.display(), "Discovered images");
    }
    Ok(names)
}

/// File name without its extension, e.g. `"moon.bmp"` -> `"moon"`.
pub fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
        .to_string()
}

/// `dir/<stem><suffix>`
pub fn output_path(dir: &Path, stem: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{stem}{suffix}"))
}
