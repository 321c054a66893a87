/// Reasons why a stack cannot be tiled into a mosaic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MosaicError {
    /// The collapsed slice axis has length zero.
    EmptyStack { shape: Vec<usize> },
    /// The input has fewer than two axes, so there is no image plane.
    RankTooLow { ndim: usize },
    /// An image in a list does not share the first image's shape.
    ShapeMismatch {
        index: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// A reshape would change the number of elements.
    ElementCountMismatch { from: Vec<usize>, to: Vec<usize> },
    /// A canvas handed to a layout does not have the layout's shape.
    CanvasMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

impl std::fmt::Display for MosaicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MosaicError::EmptyStack { shape } => {
                write!(f, "stack of shape {shape:?} contains no slices")
            }
            MosaicError::RankTooLow { ndim } => {
                write!(f, "expected at least 2 axes, got {ndim}")
            }
            MosaicError::ShapeMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "image {index} has shape {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            MosaicError::ElementCountMismatch { from, to } => {
                write!(f, "cannot reshape {from:?} into {to:?}: element count differs")
            }
            MosaicError::CanvasMismatch { expected, found } => write!(
                f,
                "canvas is {}x{}, layout expects {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for MosaicError {}
