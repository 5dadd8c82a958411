//! One-shot pipeline: discover, order, resize, composite and write a sheet.

use std::path::PathBuf;

use log::info;

use crate::cli::{CompressionLevel, ResizeFilter, UnnumberedPolicy};
use crate::error::Result;
use crate::output::{output_format, save_sheet, write_metadata};
use crate::sheet::SheetBuilder;
use crate::tile::{discover_tiles, load_tiles};

pub const DEFAULT_INPUT_DIR: &str = "./images";
pub const DEFAULT_OUTPUT_FILE: &str = "catsprites.png";
pub const DEFAULT_COLUMNS: u32 = 2;
pub const DEFAULT_TILE_SIZE: u32 = 100;

/// Settings for a single [`assemble`] run
#[derive(Debug, Clone, PartialEq)]
pub struct AssembleOptions {
    /// Directory scanned (non-recursively) for `.png` tiles
    pub input_dir: PathBuf,
    /// Sheet path; the image format follows its extension
    pub output_file: PathBuf,
    pub columns: u32,
    /// Edge length of every square tile in pixels
    pub tile_size: u32,
    pub resize_filter: ResizeFilter,
    pub unnumbered: UnnumberedPolicy,
    /// Run oxipng over PNG output
    pub compress: Option<CompressionLevel>,
    /// Also write `<stem>.json` with the frame list
    pub metadata: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            columns: DEFAULT_COLUMNS,
            tile_size: DEFAULT_TILE_SIZE,
            resize_filter: ResizeFilter::default(),
            unnumbered: UnnumberedPolicy::default(),
            compress: None,
            metadata: false,
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub output: PathBuf,
    pub metadata: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub columns: u32,
    pub rows: u32,
    pub tiles: usize,
}

/// Build a sprite sheet from `options.input_dir` and write it to `options.output_file`.
///
/// Nothing is written unless every tile decodes. Errors are returned, never
/// swallowed.
pub fn assemble(options: &AssembleOptions) -> Result<SheetSummary> {
    let builder = SheetBuilder::new(options.columns, options.tile_size);
    // Reject bad settings before touching the filesystem
    builder.grid(0)?;
    output_format(&options.output_file)?;

    let files = discover_tiles(&options.input_dir, options.unnumbered)?;
    let grid = builder.grid(files.len())?;
    info!(
        "Found {} tiles in {}, sheet will be {}x{}",
        files.len(),
        options.input_dir.display(),
        grid.width(),
        grid.height()
    );

    let tiles = load_tiles(&files, options.tile_size, options.resize_filter)?;
    let sheet = builder.build(tiles)?;

    save_sheet(&sheet, &options.output_file, options.compress)?;
    info!("Saved {}", options.output_file.display());

    let metadata = if options.metadata {
        let path = write_metadata(&sheet, &options.output_file)?;
        info!("Generated {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(SheetSummary {
        output: options.output_file.clone(),
        metadata,
        width: sheet.width(),
        height: sheet.height(),
        columns: sheet.grid.columns(),
        rows: sheet.grid.rows(),
        tiles: sheet.frames.len(),
    })
}
