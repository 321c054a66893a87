use super::timing::TimingBreakdown;
use crate::mosaic::MosaicLayout;
use serde::Serialize;

/// Summary of one mosaic run, written next to the rendered canvas.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicReport {
    /// Shape of the array handed to the mosaic builder.
    pub input_shape: Vec<usize>,
    pub slice_count: usize,
    pub layout: MosaicLayout,
    pub canvas_shape: [usize; 2],
    pub timing: TimingBreakdown,
}

impl MosaicReport {
    pub fn new(input_shape: &[usize], layout: MosaicLayout, timing: TimingBreakdown) -> Self {
        let (rows, cols) = layout.canvas_shape();
        Self {
            input_shape: input_shape.to_vec(),
            slice_count: layout.grid.len(),
            layout,
            canvas_shape: [rows, cols],
            timing,
        }
    }
}
