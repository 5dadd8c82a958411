pub mod assemble;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod sheet;
pub mod tile;

pub use assemble::{AssembleOptions, SheetSummary, assemble};
pub use cli::{CliArgs, CompressionLevel, ResizeFilter, UnnumberedPolicy};
pub use error::SpriteGridError;
pub use grid::{GridSpec, Placement};
pub use sheet::{SheetBuilder, SpriteSheet};
pub use tile::{SortKey, Tile, TileFile};
