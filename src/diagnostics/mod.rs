//! Structured, serializable output describing a mosaic run.

pub mod report;
pub mod timing;

pub use report::MosaicReport;
pub use timing::{StageTiming, TimingBreakdown};
