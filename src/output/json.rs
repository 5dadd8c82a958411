use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SpriteGridError};
use crate::grid::Rect;
use crate::sheet::{Frame, SpriteSheet};
use crate::tile::SortKey;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    meta: Meta,
    image: String,
    size: Size,
    columns: u32,
    rows: u32,
    tile_size: u32,
    frames: Vec<JsonFrame<'a>>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
    format: &'static str,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    name: &'a str,
    index: usize,
    key: SortKey,
    frame: Rect,
}

/// Path of the metadata file written next to `image_path`
pub fn metadata_path(image_path: &Path) -> PathBuf {
    image_path.with_extension("json")
}

/// Write the frame list of `sheet` as `<image stem>.json` beside the image.
pub fn write_metadata(sheet: &SpriteSheet, image_path: &Path) -> Result<PathBuf> {
    let image = image_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let output = JsonOutput {
        meta: Meta {
            app: "spritegrid",
            version: env!("CARGO_PKG_VERSION"),
            format: "rgba8888",
        },
        image,
        size: Size {
            w: sheet.width(),
            h: sheet.height(),
        },
        columns: sheet.grid.columns(),
        rows: sheet.grid.rows(),
        tile_size: sheet.grid.tile_size(),
        frames: sheet.frames.iter().map(frame_to_json).collect(),
    };

    let json_path = metadata_path(image_path);
    let content = serde_json::to_string_pretty(&output)?;

    fs::write(&json_path, content).map_err(|e| SpriteGridError::OutputWrite {
        path: json_path.clone(),
        source: e,
    })?;

    Ok(json_path)
}

fn frame_to_json(frame: &Frame) -> JsonFrame<'_> {
    JsonFrame {
        name: &frame.name,
        index: frame.index,
        key: frame.key,
        frame: frame.cell,
    }
}
