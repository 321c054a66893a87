use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the demo's stack comes from, in order of precedence: `frames`, then
/// `input`, then a synthetic brightness ramp.
#[derive(Debug, Deserialize)]
pub struct MosaicDemoConfig {
    /// Equally sized images stacked in order into an n-D array.
    #[serde(default)]
    pub frames: Vec<PathBuf>,
    /// Leading axes for `frames`; their product must equal the frame count.
    /// Empty keeps a single slice axis.
    #[serde(default)]
    pub stack_shape: Vec<usize>,
    /// Image replicated `depth` times along the slice axis.
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default = "default_depth")]
    pub depth: usize,
    #[serde(default)]
    pub synthetic: SyntheticConfig,
    pub output: MosaicOutputConfig,
}

fn default_depth() -> usize {
    64
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub width: usize,
    pub height: usize,
    /// Checkerboard cell size in pixels.
    pub cell: usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            cell: 16,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MosaicOutputConfig {
    pub mosaic_image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn parse_config(json: &str) -> Result<MosaicDemoConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<MosaicDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{e} ({})", path.display()))
}
