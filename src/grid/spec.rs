use super::Rect;
use crate::error::{Result, SpriteGridError};

/// Largest canvas accepted, in pixels (1 GiB of RGBA)
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Layout of a sheet: fixed column count, square cells, rows derived from the tile count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    columns: u32,
    tile_size: u32,
    count: usize,
    rows: u32,
    width: u32,
    height: u32,
}

/// Where the tile at a given sorted index lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub row: u32,
    pub col: u32,
    pub top: u32,
    pub left: u32,
    pub size: u32,
}

impl Placement {
    /// Region of the canvas this tile overwrites
    pub fn rect(&self) -> Rect {
        Rect::square(self.left, self.top, self.size)
    }
}

impl GridSpec {
    /// Derive the grid for `count` tiles.
    ///
    /// Fails when `columns` or `tile_size` is zero, or when the canvas would
    /// exceed [`MAX_CANVAS_PIXELS`]. With no tiles a single row is still checked,
    /// so oversized settings are caught before any image is loaded.
    pub fn new(columns: u32, tile_size: u32, count: usize) -> Result<Self> {
        if columns == 0 {
            return Err(SpriteGridError::InvalidConfig(
                "columns must be a positive integer".to_string(),
            ));
        }
        if tile_size == 0 {
            return Err(SpriteGridError::InvalidConfig(
                "tile size must be a positive integer".to_string(),
            ));
        }

        let too_large = || {
            SpriteGridError::InvalidConfig(format!(
                "{} tiles of {}px in {} columns exceed the maximum canvas size",
                count, tile_size, columns
            ))
        };

        let count_u64 = u64::try_from(count).map_err(|_e| too_large())?;
        let rows = u32::try_from(count_u64.div_ceil(u64::from(columns)))
            .map_err(|_e| too_large())?;
        let width = columns.checked_mul(tile_size).ok_or_else(too_large)?;
        let height = rows.checked_mul(tile_size).ok_or_else(too_large)?;
        let checked_height = u64::from(height.max(tile_size));
        if u64::from(width) * checked_height > MAX_CANVAS_PIXELS {
            return Err(too_large());
        }

        Ok(Self {
            columns,
            tile_size,
            count,
            rows,
            width,
            height,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Placement of the tile at sorted `index`, or `None` past the last tile.
    pub fn placement(&self, index: usize) -> Option<Placement> {
        if index >= self.count {
            return None;
        }
        let index_u64 = u64::try_from(index).ok()?;
        let columns = u64::from(self.columns);
        // index < count, so row < rows and both fit in u32
        let row = u32::try_from(index_u64 / columns).ok()?;
        let col = u32::try_from(index_u64 % columns).ok()?;

        Some(Placement {
            index,
            row,
            col,
            top: row * self.tile_size,
            left: col * self.tile_size,
            size: self.tile_size,
        })
    }

    /// Placements for every tile, in sorted order
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        (0..self.count).filter_map(|i| self.placement(i))
    }
}
