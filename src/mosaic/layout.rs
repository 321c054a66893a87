use super::error::MosaicError;
use super::grid::TileGrid;
use ndarray::{s, Array3, ArrayBase, ArrayView2, Data, Ix2};
use serde::Serialize;
use std::ops::Range;

/// Grid plus tile shape: enough to locate every slice on a mosaic canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicLayout {
    pub grid: TileGrid,
    /// Rows per tile (`nr`).
    pub tile_rows: usize,
    /// Columns per tile (`nc`).
    pub tile_cols: usize,
}

impl MosaicLayout {
    pub fn new(grid: TileGrid, tile_rows: usize, tile_cols: usize) -> Self {
        Self {
            grid,
            tile_rows,
            tile_cols,
        }
    }

    /// Shape `(rows, cols)` of the canvas this layout fills.
    pub fn canvas_shape(&self) -> (usize, usize) {
        (
            self.tile_rows * self.grid.rows,
            self.tile_cols * self.grid.cols,
        )
    }

    /// Canvas row and column ranges covered by slice `index`.
    pub fn block_bounds(&self, index: usize) -> Option<(Range<usize>, Range<usize>)> {
        if index >= self.grid.len() {
            return None;
        }
        let (row, col) = self.grid.position(index);
        let r0 = row * self.tile_rows;
        let c0 = col * self.tile_cols;
        Some((r0..r0 + self.tile_rows, c0..c0 + self.tile_cols))
    }

    /// Borrow the tile holding slice `index`.
    ///
    /// Returns `None` when `index` is out of range or the canvas is smaller
    /// than the layout.
    pub fn tile<'a, S>(
        &self,
        canvas: &'a ArrayBase<S, Ix2>,
        index: usize,
    ) -> Option<ArrayView2<'a, S::Elem>>
    where
        S: Data,
    {
        let (rows, cols) = self.block_bounds(index)?;
        let (h, w) = canvas.dim();
        if rows.end > h || cols.end > w {
            return None;
        }
        Some(canvas.slice(s![rows, cols]))
    }

    /// Recover the `(nz, nr, nc)` stack from a canvas built with this layout.
    pub fn split<A, S>(&self, canvas: &ArrayBase<S, Ix2>) -> Result<Array3<A>, MosaicError>
    where
        A: Clone + Default,
        S: Data<Elem = A>,
    {
        if canvas.dim() != self.canvas_shape() {
            return Err(MosaicError::CanvasMismatch {
                expected: self.canvas_shape(),
                found: canvas.dim(),
            });
        }
        let mut stack = Array3::default((self.grid.len(), self.tile_rows, self.tile_cols));
        for (index, mut slice) in stack.outer_iter_mut().enumerate() {
            if let Some((rows, cols)) = self.block_bounds(index) {
                slice.assign(&canvas.slice(s![rows, cols]));
            }
        }
        Ok(stack)
    }
}
