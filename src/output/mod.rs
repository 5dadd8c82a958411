mod format;
mod json;

pub use format::{output_format, save_sheet};
pub use json::{metadata_path, write_metadata};
