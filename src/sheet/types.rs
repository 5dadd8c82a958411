use image::RgbaImage;

use crate::grid::{GridSpec, Rect};
use crate::tile::SortKey;

/// Position of one source file on the finished sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Source file name
    pub name: String,
    /// Sorted position, row-major
    pub index: usize,
    pub key: SortKey,
    /// Cell the tile occupies on the canvas
    pub cell: Rect,
}

/// A composited sprite sheet
#[derive(Debug)]
pub struct SpriteSheet {
    pub grid: GridSpec,
    /// Rendered canvas, `grid.width() x grid.height()`
    pub image: RgbaImage,
    /// One entry per tile, in sheet order
    pub frames: Vec<Frame>,
}

impl SpriteSheet {
    pub fn new(grid: GridSpec) -> Self {
        Self {
            grid,
            image: RgbaImage::new(grid.width(), grid.height()),
            frames: Vec::with_capacity(grid.count()),
        }
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }
}
