use ndarray::Array3;

/// Stack whose every pixel encodes `(slice, row, col)`, so misplaced or
/// duplicated pixels are detectable after tiling.
pub fn labelled_stack(nz: usize, nr: usize, nc: usize) -> Array3<u64> {
    assert!(nr < 1000 && nc < 1000, "labels assume fewer than 1000 rows/cols");
    Array3::from_shape_fn((nz, nr, nc), |(k, y, x)| {
        (k * 1_000_000 + y * 1000 + x) as u64
    })
}
