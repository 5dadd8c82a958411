mod discover;
mod loader;
mod resizer;
mod tile;

pub use discover::{TILE_EXTENSION, discover_tiles};
pub use loader::load_tiles;
pub use resizer::{cover_dimensions, cover_fit};
pub use tile::{SortKey, Tile, TileFile};
