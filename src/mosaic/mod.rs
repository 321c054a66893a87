//! Mosaic builder: tile an n-D image stack onto one 2-D canvas.
//!
//! The last two axes of the input are the image plane `(nr, nc)`. Every
//! leading axis is collapsed, in row-major order, into a single slice axis of
//! length `nz`. Slices are copied verbatim onto a [`TileGrid`] of
//! `rows × cols` blocks, filling the grid row by row, so slice `k` lands on
//! tile `(k / cols, k % cols)`.
//!
//! Inputs with two or fewer axes are already a mosaic and are returned as-is.

pub mod error;
pub mod grid;
pub mod layout;
pub mod reshape;
pub mod stack;

pub use self::error::MosaicError;
pub use self::grid::{largest_divisor_at_most, TileGrid};
pub use self::layout::MosaicLayout;
pub use self::reshape::{reshape, reshape_view};
pub use self::stack::{stack_images, stack_with_shape, tile_stack};

use log::debug;
use ndarray::{s, Array2, ArrayBase, ArrayD, ArrayView3, Data, Dimension};

/// Tile `img` into a near-square 2-D mosaic.
///
/// Arrays with at most two axes come back unchanged. Anything larger yields a
/// canvas of shape `(nr * rows, nc * cols)` where `rows * cols` is the number
/// of slices and `cols >= rows`. A stack without slices is rejected.
pub fn mosaic<A, S, D>(img: &ArrayBase<S, D>) -> Result<ArrayD<A>, MosaicError>
where
    A: Clone + Default,
    S: Data<Elem = A>,
    D: Dimension,
{
    if img.ndim() <= 2 {
        return Ok(img.to_owned().into_dyn());
    }
    let (canvas, _) = mosaic_with_layout(img)?;
    Ok(canvas.into_dyn())
}

/// Like [`mosaic`], but always returns a 2-D canvas together with the layout
/// that places each slice on it.
///
/// A 2-D input is treated as a stack holding one slice.
pub fn mosaic_with_layout<A, S, D>(
    img: &ArrayBase<S, D>,
) -> Result<(Array2<A>, MosaicLayout), MosaicError>
where
    A: Clone + Default,
    S: Data<Elem = A>,
    D: Dimension,
{
    let shape = img.shape();
    let ndim = shape.len();
    if ndim < 2 {
        return Err(MosaicError::RankTooLow { ndim });
    }
    let (nr, nc) = (shape[ndim - 2], shape[ndim - 1]);
    let nz: usize = shape[..ndim - 2].iter().product();
    if nz == 0 {
        return Err(MosaicError::EmptyStack {
            shape: shape.to_vec(),
        });
    }
    let stack = reshape_view(img, (nz, nr, nc))?;
    build(stack.view())
}

/// Tile an explicit `(nz, nr, nc)` stack.
pub fn mosaic_stack<A: Clone + Default>(
    stack: ArrayView3<'_, A>,
) -> Result<Array2<A>, MosaicError> {
    build(stack).map(|(canvas, _)| canvas)
}

fn build<A: Clone + Default>(
    stack: ArrayView3<'_, A>,
) -> Result<(Array2<A>, MosaicLayout), MosaicError> {
    let (nz, nr, nc) = stack.dim();
    let grid = TileGrid::for_slices(nz).map_err(|_| MosaicError::EmptyStack {
        shape: vec![nz, nr, nc],
    })?;
    let layout = MosaicLayout::new(grid, nr, nc);

    let mut canvas = Array2::default(layout.canvas_shape());
    for (index, slice) in stack.outer_iter().enumerate() {
        if let Some((rows, cols)) = layout.block_bounds(index) {
            canvas.slice_mut(s![rows, cols]).assign(&slice);
        }
    }

    debug!(
        "mosaic: {nz} slices of {nr}x{nc} -> {}x{} tiles, canvas {:?}",
        grid.rows,
        grid.cols,
        canvas.dim()
    );
    Ok((canvas, layout))
}
