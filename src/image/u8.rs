use ndarray::ArrayView2;

/// Borrowed 8-bit grayscale view.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Borrow a standard-layout `(h, w)` array. `None` for other layouts.
    pub fn from_array_view(arr: ArrayView2<'a, u8>) -> Option<Self> {
        let (h, w) = arr.dim();
        let data = arr.to_slice()?;
        Some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }
}

impl crate::image::traits::ImageView for ImageU8<'_> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::ImageU8;
    use crate::image::ImageView;
    use ndarray::array;

    #[test]
    fn borrows_standard_layout_only() {
        let arr = array![[1u8, 2, 3], [4, 5, 6]];
        let img = ImageU8::from_array_view(arr.view()).expect("standard layout");
        assert_eq!((img.w, img.h, img.stride), (3, 2, 3));
        assert_eq!(img.row(1), &[4, 5, 6]);

        assert!(ImageU8::from_array_view(arr.t()).is_none());
    }
}
