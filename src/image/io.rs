//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit gray buffer.
//! - `save_grayscale_u8` / `save_array_u8`: write 8-bit pixels to a PNG.
//! - `save_grayscale_f32`: write an `ImageF32` in `[0, 1]` to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{to_array, ImageF32, ImageU8, ImageView};
use image::{GrayImage, Luma};
use ndarray::{Array2, ArrayView2};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer from tightly packed rows.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Copy an `(height, width)` array in logical row-major order.
    pub fn from_array(arr: ArrayView2<'_, u8>) -> Self {
        let (height, width) = arr.dim();
        Self::new(width, height, arr.iter().copied().collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    /// Copy into an `(height, width)` array.
    pub fn to_array(&self) -> Array2<u8> {
        to_array(&self.as_view())
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Save an 8-bit grayscale view to a PNG, dropping any row padding.
pub fn save_grayscale_u8(image: ImageU8<'_>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let pixels = match image.as_slice() {
        Some(slice) => slice.to_vec(),
        None => image.rows().flatten().copied().collect(),
    };
    let out = GrayImage::from_raw(image.w as u32, image.h as u32, pixels)
        .ok_or_else(|| format!("Failed to create image buffer for {}", path.display()))?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an `(height, width)` byte array to a PNG.
pub fn save_array_u8(arr: ArrayView2<'_, u8>, path: &Path) -> Result<(), String> {
    match ImageU8::from_array_view(arr.view()) {
        Some(view) => save_grayscale_u8(view, path),
        None => save_grayscale_u8(GrayImageU8::from_array(arr).as_view(), path),
    }
}

/// Save a float image to a grayscale PNG, clamping values in [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("image-mosaic-{name}-{}", std::process::id()))
    }

    #[test]
    fn u8_png_round_trips_through_disk() {
        let dir = scratch_dir("u8");
        let path = dir.join("nested").join("tile.png");
        let arr = array![[0u8, 64, 128], [192, 255, 7]];
        save_array_u8(arr.view(), &path).unwrap();

        let loaded = load_grayscale_image(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (3, 2));
        assert_eq!(loaded.to_array(), arr);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn transposed_array_is_saved_logically() {
        let dir = scratch_dir("transposed");
        let path = dir.join("t.png");
        let arr = array![[1u8, 2], [3, 4], [5, 6]];
        save_array_u8(arr.t(), &path).unwrap();

        let loaded = load_grayscale_image(&path).unwrap();
        assert_eq!(loaded.to_array(), arr.t());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn f32_png_is_scaled_and_clamped() {
        let dir = scratch_dir("f32");
        let path = dir.join("f.png");
        let img = ImageF32::from_array(&array![[-1.0f32, 0.0, 0.5, 1.0, 2.0]]);
        save_grayscale_f32(&img, &path).unwrap();

        let loaded = load_grayscale_image(&path).unwrap();
        assert_eq!(loaded.to_array(), array![[0u8, 0, 127, 255, 255]]);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_grayscale_image(Path::new("/nonexistent/mosaic.png")).unwrap_err();
        assert!(err.contains("/nonexistent/mosaic.png"), "{err}");
    }
}
