//! Synthetic test patterns for demos and tests.

use super::io::GrayImageU8;
use ndarray::Array3;

/// High-contrast checkerboard with square cells of `cell` pixels.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> GrayImageU8 {
    let cell = cell.max(1);
    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let parity = (x / cell + y / cell) & 1;
            data[y * width + x] = if parity == 0 { 32 } else { 220 };
        }
    }
    GrayImageU8::new(width, height, data)
}

/// Stack of `depth` checkerboards in `[0, 1]` whose brightness ramps with the
/// slice index, so tile order is visible once the stack is tiled.
pub fn brightness_ramp_stack(
    depth: usize,
    width: usize,
    height: usize,
    cell: usize,
) -> Array3<f32> {
    let board = checkerboard_u8(width, height, cell).to_array();
    Array3::from_shape_fn((depth, height, width), |(k, y, x)| {
        let gain = (k + 1) as f32 / depth as f32;
        board[[y, x]] as f32 / 255.0 * gain
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_alternates_cells() {
        let board = checkerboard_u8(8, 4, 2).to_array();
        assert_eq!(board[[0, 0]], 32);
        assert_eq!(board[[0, 2]], 220);
        assert_eq!(board[[2, 0]], 220);
        assert_eq!(board[[3, 3]], 32);
    }

    #[test]
    fn ramp_stack_brightens_with_index() {
        let stack = brightness_ramp_stack(4, 6, 6, 3);
        assert_eq!(stack.dim(), (4, 6, 6));
        let bright = |k: usize| stack[[k, 0, 3]];
        assert!(bright(0) < bright(1) && bright(1) < bright(2) && bright(2) < bright(3));
        assert!((bright(3) - 220.0 / 255.0).abs() < 1e-6);
    }
}
