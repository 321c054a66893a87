//! Element-count-checked reshapes.
//!
//! Axes are reinterpreted in logical row-major order. A target shape whose
//! element count differs from the source is rejected instead of truncating or
//! padding the data.

use super::error::MosaicError;
use ndarray::{ArrayBase, ArrayD, CowArray, Data, Dimension, IntoDimension, IxDyn};

/// Reshape `img` into `dims`, copying into a fresh array.
pub fn reshape<A, S, D>(img: &ArrayBase<S, D>, dims: &[usize]) -> Result<ArrayD<A>, MosaicError>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    reshape_view(img, IxDyn(dims)).map(|cow| cow.into_owned())
}

/// Reshape `img` into `shape`, borrowing when the input is in standard layout
/// and copying otherwise.
pub fn reshape_view<'a, A, S, D, E>(
    img: &'a ArrayBase<S, D>,
    shape: E,
) -> Result<CowArray<'a, A, E::Dim>, MosaicError>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
    E: IntoDimension,
{
    let dim = shape.into_dimension();
    let mismatch = || MosaicError::ElementCountMismatch {
        from: img.shape().to_vec(),
        to: dim.slice().to_vec(),
    };
    if dim.size_checked() != Some(img.len()) {
        return Err(mismatch());
    }
    img.to_shape(dim.clone()).map_err(|_| mismatch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3, Axis};

    #[test]
    fn reshape_keeps_row_major_order() {
        let arr = Array2::from_shape_fn((2, 6), |(y, x)| y * 6 + x);
        let out = reshape(&arr, &[3, 2, 2]).unwrap();
        assert_eq!(out.shape(), &[3, 2, 2]);
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), (0..12usize).collect::<Vec<_>>());
    }

    #[test]
    fn reshape_rejects_changed_element_count() {
        let arr = Array3::<u8>::zeros((2, 3, 4));
        assert_eq!(
            reshape(&arr, &[5, 5]),
            Err(MosaicError::ElementCountMismatch {
                from: vec![2, 3, 4],
                to: vec![5, 5],
            })
        );
    }

    #[test]
    fn reshape_view_borrows_standard_layout() {
        let arr = Array3::from_shape_fn((2, 2, 3), |(a, b, c)| a * 6 + b * 3 + c);
        let view = reshape_view(&arr, (4, 3)).unwrap();
        assert!(view.is_view());
        assert_eq!(view.index_axis(Axis(0), 3).to_vec(), vec![9usize, 10, 11]);
    }

    #[test]
    fn reshape_view_copies_permuted_input_logically() {
        let arr = Array2::from_shape_fn((2, 3), |(y, x)| y * 3 + x);
        let transposed = arr.t();
        let out = reshape_view(&transposed, 6).unwrap();
        assert!(out.is_owned());
        assert_eq!(out.to_vec(), vec![0usize, 3, 1, 4, 2, 5]);
    }
}
