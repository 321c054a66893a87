use ndarray::Array2;

/// Row-addressable read access to a single-channel image.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn as_slice(&self) -> Option<&[Self::Pixel]> {
        None
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}

/// Copy any image view into an `(height, width)` array, dropping row padding.
pub fn to_array<I: ImageView>(image: &I) -> Array2<I::Pixel> {
    if let Some(data) = image.as_slice() {
        if let Ok(arr) = Array2::from_shape_vec((image.height(), image.width()), data.to_vec()) {
            return arr;
        }
    }
    Array2::from_shape_fn((image.height(), image.width()), |(y, x)| image.row(y)[x])
}
