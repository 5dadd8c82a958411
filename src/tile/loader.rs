use std::path::Path;

use image::{ImageReader, RgbaImage};
use log::{debug, info};
use rayon::prelude::*;

use super::{Tile, TileFile, cover_fit};
use crate::cli::ResizeFilter;
use crate::error::{Result, SpriteGridError};

/// Decode and cover-fit every file in parallel.
///
/// The returned tiles keep the order of `files` regardless of which decode
/// finishes first. The first failure aborts the whole batch.
pub fn load_tiles(files: &[TileFile], tile_size: u32, filter: ResizeFilter) -> Result<Vec<Tile>> {
    info!("Loading {} images...", files.len());

    let filter = filter.to_image_filter();
    files
        .par_iter()
        .map(|file| -> Result<Tile> {
            let source = decode_rgba(&file.path)?;
            debug!(
                "{} ({}x{}) -> {}x{}",
                file.name,
                source.width(),
                source.height(),
                tile_size,
                tile_size
            );
            Ok(Tile {
                file: file.clone(),
                image: cover_fit(&source, tile_size, filter),
            })
        })
        .collect()
}

fn decode_rgba(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)
        .map_err(|e| SpriteGridError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| SpriteGridError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SpriteGridError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    Ok(img)
}
