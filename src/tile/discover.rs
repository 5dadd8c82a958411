use std::path::Path;

use log::{debug, warn};

use super::{SortKey, TileFile};
use crate::cli::UnnumberedPolicy;
use crate::error::{Result, SpriteGridError};

/// Extension a directory entry must end with to become a tile (case-sensitive)
pub const TILE_EXTENSION: &str = ".png";

/// List `dir` (non-recursive) and return its `.png` files in sheet order.
///
/// Fails with [`SpriteGridError::NoImages`] when nothing survives filtering.
pub fn discover_tiles(dir: &Path, unnumbered: UnnumberedPolicy) -> Result<Vec<TileFile>> {
    let read_error = |e| SpriteGridError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();

        let file_name = entry.file_name();
        let Some(stem) = file_name
            .as_encoded_bytes()
            .strip_suffix(TILE_EXTENSION.as_bytes())
        else {
            continue;
        };
        if !path.is_file() {
            continue;
        }

        // Names need not be UTF-8; keep the tile and use a lossy name
        let name = file_name.to_string_lossy().into_owned();
        if file_name.to_str().is_none() {
            debug!("{} is not valid UTF-8, using {:?}", path.display(), name);
        }

        let key = SortKey::parse(&String::from_utf8_lossy(stem));
        if !key.is_numeric() {
            match unnumbered {
                UnnumberedPolicy::Last => {
                    debug!("{} has no leading integer, placing it last", name);
                }
                UnnumberedPolicy::Skip => {
                    warn!("Skipping {}: file name does not start with an integer", name);
                    continue;
                }
                UnnumberedPolicy::Error => return Err(SpriteGridError::InvalidSortKey(name)),
            }
        }

        files.push(TileFile { path, name, key });
    }

    if files.is_empty() {
        return Err(SpriteGridError::NoImages(dir.to_path_buf()));
    }

    files.sort_by(TileFile::sheet_order);
    Ok(files)
}
