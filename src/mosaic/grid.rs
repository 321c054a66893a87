//! Tile grid selection.
//!
//! A stack of `nz` slices is arranged on `rows × cols` tiles with
//! `rows * cols == nz` and `cols >= rows`. The smaller side is the largest
//! divisor of `nz` not exceeding `floor(sqrt(nz))`, which makes the grid as
//! square as the slice count allows. Prime counts degrade to a single row.

use super::error::MosaicError;
use serde::Serialize;

/// Arrangement of tiles on the mosaic canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileGrid {
    /// Number of tile rows (`n2`).
    pub rows: usize,
    /// Number of tile columns (`n1`), never smaller than `rows`.
    pub cols: usize,
}

impl TileGrid {
    /// Choose the most square grid holding exactly `slices` tiles.
    pub fn for_slices(slices: usize) -> Result<Self, MosaicError> {
        if slices == 0 {
            return Err(MosaicError::EmptyStack { shape: vec![0] });
        }
        let m = largest_divisor_at_most(slices, slices.isqrt());
        let j = slices / m;
        Ok(Self {
            rows: j.min(m),
            cols: j.max(m),
        })
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Never true for a grid from [`TileGrid::for_slices`], which rejects zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tile `(row, col)` holding slice `index`. Slices fill the grid row by row.
    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

/// Largest `d` in `[1, limit]` dividing `value`.
///
/// Returns 1 when `value` or `limit` is zero; 1 divides everything else.
pub fn largest_divisor_at_most(value: usize, limit: usize) -> usize {
    if value == 0 {
        return 1;
    }
    (1..=limit.min(value))
        .rev()
        .find(|d| value % d == 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::{largest_divisor_at_most, TileGrid};
    use crate::mosaic::MosaicError;

    fn grid(slices: usize) -> (usize, usize) {
        let g = TileGrid::for_slices(slices).expect("non-empty stack");
        (g.rows, g.cols)
    }

    #[test]
    fn perfect_square_counts_give_square_grids() {
        assert_eq!(grid(1), (1, 1));
        assert_eq!(grid(4), (2, 2));
        assert_eq!(grid(64), (8, 8));
    }

    #[test]
    fn composite_counts_pick_nearest_divisor() {
        assert_eq!(grid(12), (3, 4));
        assert_eq!(grid(18), (3, 6));
        assert_eq!(grid(24), (4, 6));
        assert_eq!(grid(50), (5, 10));
    }

    #[test]
    fn prime_counts_fall_back_to_single_row() {
        assert_eq!(grid(2), (1, 2));
        assert_eq!(grid(7), (1, 7));
        assert_eq!(grid(13), (1, 13));
    }

    #[test]
    fn grid_is_exact_and_never_taller_than_wide() {
        for nz in 1..=200 {
            let g = TileGrid::for_slices(nz).unwrap();
            assert_eq!(g.len(), nz, "nz={nz}");
            assert!(g.cols >= g.rows, "nz={nz} gave {g:?}");
            let n = nz.isqrt();
            // No divisor between rows and floor(sqrt(nz)) was skipped.
            assert!(
                (g.rows + 1..=n).all(|d| nz % d != 0),
                "nz={nz} rows={} not the largest divisor <= {n}",
                g.rows
            );
        }
    }

    #[test]
    fn zero_slices_are_rejected() {
        assert_eq!(
            TileGrid::for_slices(0),
            Err(MosaicError::EmptyStack { shape: vec![0] })
        );
    }

    #[test]
    fn divisor_search_respects_limit() {
        assert_eq!(largest_divisor_at_most(36, 6), 6);
        assert_eq!(largest_divisor_at_most(36, 5), 4);
        assert_eq!(largest_divisor_at_most(35, 5), 5);
        assert_eq!(largest_divisor_at_most(35, 4), 1);
        assert_eq!(largest_divisor_at_most(3, 10), 3);
        assert_eq!(largest_divisor_at_most(10, 0), 1);
    }

    #[test]
    fn positions_fill_row_major() {
        let g = TileGrid { rows: 3, cols: 4 };
        assert_eq!(g.position(0), (0, 0));
        assert_eq!(g.position(3), (0, 3));
        assert_eq!(g.position(4), (1, 0));
        assert_eq!(g.position(11), (2, 3));
    }

    #[test]
    fn chosen_grids_are_never_empty() {
        assert!(!TileGrid::for_slices(1).unwrap().is_empty());
        assert!(!TileGrid::for_slices(7).unwrap().is_empty());
        assert!(TileGrid { rows: 0, cols: 3 }.is_empty());
    }
}
