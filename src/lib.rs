#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod image;
pub mod mosaic;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::MosaicReport;
pub use crate::mosaic::{
    mosaic, mosaic_stack, mosaic_with_layout, reshape, stack_images, stack_with_shape,
    tile_stack, MosaicError, MosaicLayout, TileGrid,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use image_mosaic::prelude::*;
/// use ndarray::Array3;
///
/// let stack = Array3::<f32>::zeros((7, 4, 4));
/// let (canvas, layout) = mosaic_with_layout(&stack).unwrap();
/// assert_eq!(layout.grid, TileGrid { rows: 1, cols: 7 });
/// assert_eq!(canvas.dim(), (4, 28));
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::{mosaic, mosaic_with_layout, MosaicError, MosaicLayout, TileGrid};
}
