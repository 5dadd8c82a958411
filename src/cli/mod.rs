mod args;

pub use args::{CliArgs, CompressionLevel, ResizeFilter, UnnumberedPolicy};
