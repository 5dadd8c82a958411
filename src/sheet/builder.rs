use image::imageops;
use log::{debug, info};

use super::{Frame, SpriteSheet};
use crate::error::{Result, SpriteGridError};
use crate::grid::GridSpec;
use crate::tile::Tile;

/// Configuration for sheet composition
#[derive(Debug, Clone, Copy)]
pub struct SheetBuilder {
    pub columns: u32,
    pub tile_size: u32,
}

impl Default for SheetBuilder {
    fn default() -> Self {
        Self::new(2, 100)
    }
}

impl SheetBuilder {
    pub fn new(columns: u32, tile_size: u32) -> Self {
        Self { columns, tile_size }
    }

    /// Grid for `count` tiles with this builder's settings
    pub fn grid(&self, count: usize) -> Result<GridSpec> {
        GridSpec::new(self.columns, self.tile_size, count)
    }

    /// Paste `tiles`, already in sheet order, onto a transparent canvas.
    ///
    /// Tiles replace the pixels of their cell outright; nothing is blended.
    pub fn build(&self, tiles: Vec<Tile>) -> Result<SpriteSheet> {
        let grid = self.grid(tiles.len())?;

        if let Some(tile) = tiles
            .iter()
            .find(|t| t.image.dimensions() != (self.tile_size, self.tile_size))
        {
            return Err(SpriteGridError::InvalidConfig(format!(
                "tile '{}' is {}x{}, expected {}x{}",
                tile.file.name,
                tile.image.width(),
                tile.image.height(),
                self.tile_size,
                self.tile_size
            )));
        }

        let mut sheet = SpriteSheet::new(grid);

        for (placement, tile) in grid.placements().zip(tiles) {
            let cell = placement.rect();
            debug!(
                "{} -> row {}, col {} covering ({}, {})..({}, {})",
                tile.file.name,
                placement.row,
                placement.col,
                cell.x,
                cell.y,
                cell.right(),
                cell.bottom()
            );

            let (x, y) = cell.origin();
            imageops::replace(&mut sheet.image, &tile.image, x, y);

            sheet.frames.push(Frame {
                name: tile.file.name,
                index: placement.index,
                key: tile.file.key,
                cell,
            });
        }

        info!(
            "Composited {} tiles into {}x{} sheet ({} columns x {} rows)",
            sheet.frames.len(),
            sheet.width(),
            sheet.height(),
            grid.columns(),
            grid.rows()
        );

        Ok(sheet)
    }
}
