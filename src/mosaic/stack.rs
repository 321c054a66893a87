//! Helpers that assemble 3-D stacks from individual 2-D images.

use super::error::MosaicError;
use super::reshape::reshape;
use ndarray::{Array3, ArrayD, ArrayView2};

/// Replicate `image` `depth` times along a new leading axis.
pub fn tile_stack<A: Clone>(image: ArrayView2<'_, A>, depth: usize) -> Array3<A> {
    let (h, w) = image.dim();
    Array3::from_shape_fn((depth, h, w), |(_, y, x)| image[[y, x]].clone())
}

/// Stack equally sized images along a new leading axis.
pub fn stack_images<A: Clone>(images: &[ArrayView2<'_, A>]) -> Result<Array3<A>, MosaicError> {
    let first = images
        .first()
        .ok_or(MosaicError::EmptyStack { shape: vec![0] })?;
    let expected = first.dim();
    if let Some((index, img)) = images
        .iter()
        .enumerate()
        .find(|(_, img)| img.dim() != expected)
    {
        return Err(MosaicError::ShapeMismatch {
            index,
            expected,
            found: img.dim(),
        });
    }
    let (h, w) = expected;
    Ok(Array3::from_shape_fn((images.len(), h, w), |(k, y, x)| {
        images[k][[y, x]].clone()
    }))
}

/// Stack equally sized images, then arrange them on the leading axes
/// `leading`, giving an array of shape `leading ++ [h, w]`.
///
/// An empty `leading` keeps the single slice axis. The product of `leading`
/// must equal the number of images.
pub fn stack_with_shape<A: Clone>(
    images: &[ArrayView2<'_, A>],
    leading: &[usize],
) -> Result<ArrayD<A>, MosaicError> {
    let stack = stack_images(images)?;
    if leading.is_empty() {
        return Ok(stack.into_dyn());
    }
    let (_, h, w) = stack.dim();
    let dims: Vec<usize> = leading.iter().copied().chain([h, w]).collect();
    reshape(&stack, &dims)
}
