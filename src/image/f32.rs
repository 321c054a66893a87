//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Intensities are expected in `[0, 1]`. Built from `ndarray::Array2<f32>`
//! so a tiled float canvas can be written out as a grayscale PNG.
use ndarray::Array2;

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Copy an `(h, w)` array, in logical row-major order.
    pub fn from_array(arr: &Array2<f32>) -> Self {
        let (h, w) = arr.dim();
        let data = match arr.as_slice() {
            Some(slice) => slice.to_vec(),
            None => arr.iter().copied().collect(),
        };
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::ImageF32;
    use crate::image::{to_array, ImageView};
    use ndarray::array;

    #[test]
    fn array_conversion_preserves_pixels() {
        let arr = array![[0.0f32, 0.25, 0.5], [0.75, 1.0, 0.125]];
        let img = ImageF32::from_array(&arr);
        assert_eq!((img.w, img.h), (3, 2));
        assert_eq!(img.row(1), &[0.75, 1.0, 0.125]);
        assert_eq!(to_array(&img), arr);
    }

    #[test]
    fn transposed_array_is_read_logically() {
        let arr = array![[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]].reversed_axes();
        let img = ImageF32::from_array(&arr);
        assert_eq!((img.w, img.h), (3, 2));
        assert_eq!(img.as_slice(), Some(&[1.0, 3.0, 5.0, 2.0, 4.0, 6.0][..]));
    }
}
