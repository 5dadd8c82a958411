use serde::{Deserialize, Serialize};

use crate::assemble::{DEFAULT_COLUMNS, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_TILE_SIZE};
use crate::cli::{ResizeFilter, UnnumberedPolicy};

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Spritegrid configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Directory holding the numbered .png frames
    pub input_dir: String,
    /// Sprite sheet path; the extension picks the image format
    pub output_file: String,
    /// Tiles per row
    pub columns: u32,
    /// Edge length of each square tile in pixels
    pub tile_size: u32,
    /// Resize filter algorithm
    pub resize_filter: ResizeFilter,
    /// Handling of files without a leading integer: "last", "skip" or "error"
    pub unnumbered: UnnumberedPolicy,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
    /// Write a JSON frame list next to the sheet
    pub metadata: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input_dir: DEFAULT_INPUT_DIR.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            columns: DEFAULT_COLUMNS,
            tile_size: DEFAULT_TILE_SIZE,
            resize_filter: ResizeFilter::default(),
            unnumbered: UnnumberedPolicy::default(),
            compress: None,
            metadata: false,
        }
    }
}
