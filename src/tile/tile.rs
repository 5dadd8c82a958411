use image::RgbaImage;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;

/// Ordering key taken from the leading integer of a file stem.
///
/// Numbered keys sort ascending and always come before unnumbered ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum SortKey {
    Numeric(i64),
    Unnumbered,
}

impl SortKey {
    /// Parse the optional sign and ASCII digits at the start of `stem`.
    ///
    /// `"12"` and `"12_idle"` give `Numeric(12)`; `"idle"`, `""` and values
    /// outside `i64` give `Unnumbered`.
    pub fn parse(stem: &str) -> Self {
        let bytes = stem.as_bytes();
        let sign_len = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
        let digits = bytes[sign_len..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return SortKey::Unnumbered;
        }
        stem[..sign_len + digits]
            .parse::<i64>()
            .map(SortKey::Numeric)
            .unwrap_or(SortKey::Unnumbered)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, SortKey::Numeric(_))
    }
}

/// A `.png` entry of the input directory that will become one tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileFile {
    /// Full path to the source image
    pub path: PathBuf,
    /// File name including the extension
    pub name: String,
    pub key: SortKey,
}

impl TileFile {
    /// Sheet order: by key, then by file name so equal keys stay deterministic.
    pub fn sheet_order(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// A decoded source image after the cover-fit resize
#[derive(Debug, Clone)]
pub struct Tile {
    pub file: TileFile,
    /// Square RGBA buffer, `tile_size` on each side
    pub image: RgbaImage,
}
