use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use log::{debug, warn};

use crate::cli::CompressionLevel;
use crate::error::{Result, SpriteGridError};
use crate::sheet::SpriteSheet;

/// Encode the sheet in the format implied by `path`'s extension and write it.
///
/// Encoding happens in memory first, so a failed encode never leaves a file
/// behind. An existing file at `path` is overwritten.
pub fn save_sheet(
    sheet: &SpriteSheet,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    let format = output_format(path)?;
    let encoded = encode(sheet, path, format)?;

    let output_data = match compress {
        Some(level) if format == ImageFormat::Png => {
            debug!("Optimizing PNG at level {}", level);
            let opts = match level {
                CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
                CompressionLevel::Max => oxipng::Options::max_compression(),
            };
            oxipng::optimize_from_memory(&encoded, &opts).map_err(|e| {
                SpriteGridError::PngCompress {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            })?
        }
        Some(_) => {
            warn!(
                "Ignoring --compress: {} is not a PNG output",
                path.display()
            );
            encoded
        }
        None => encoded,
    };

    fs::write(path, output_data).map_err(|e| SpriteGridError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Image format implied by the extension of `path`, if the encoder is available
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(ImageFormat::writing_enabled)
        .ok_or_else(|| SpriteGridError::UnsupportedFormat(path.to_path_buf()))
}

fn encode(sheet: &SpriteSheet, path: &Path, format: ImageFormat) -> Result<Vec<u8>> {
    let save_error = |e| SpriteGridError::ImageSave {
        path: path.to_path_buf(),
        source: e,
    };

    let mut data = Cursor::new(Vec::new());
    if format == ImageFormat::Jpeg {
        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgba8(sheet.image.clone()).into_rgb8();
        rgb.write_to(&mut data, format).map_err(save_error)?;
    } else {
        sheet.image.write_to(&mut data, format).map_err(save_error)?;
    }

    Ok(data.into_inner())
}
