use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use spritegrid::assemble::{AssembleOptions, assemble};
use spritegrid::cli::{CliArgs, CompressionLevel};
use spritegrid::config::{CompressConfig, LoadedConfig, SheetConfig, make_relative, save_config};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let options = merge_config_with_args(&cli)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Spritegrid v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &cli.save_config {
        write_config_file(&options, path)?;
        info!("Saved settings to {}", path.display());
    }

    let summary = assemble(&options).with_context(|| {
        format!(
            "failed to assemble sprite sheet from {}",
            options.input_dir.display()
        )
    })?;

    info!(
        "Combined {} images into {} ({}x{}, {} columns x {} rows)",
        summary.tiles,
        summary.output.display(),
        summary.width,
        summary.height,
        summary.columns,
        summary.rows
    );

    Ok(())
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs) -> Result<AssembleOptions> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    let defaults = AssembleOptions::default();

    // Paths: CLI > config (relative to the config file) > default
    let input_dir = args.input.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(LoadedConfig::resolve_input_dir)
            .unwrap_or_else(|| defaults.input_dir.clone())
    });

    let output_file = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(LoadedConfig::resolve_output_file)
            .unwrap_or_else(|| defaults.output_file.clone())
    });

    let columns = args.columns.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.columns)
            .unwrap_or(defaults.columns)
    });

    let tile_size = args.tile_size.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.tile_size)
            .unwrap_or(defaults.tile_size)
    });

    let resize_filter = args.resize_filter.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.resize_filter)
            .unwrap_or(defaults.resize_filter)
    });

    let unnumbered = args.unnumbered.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.unnumbered)
            .unwrap_or(defaults.unnumbered)
    });

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        lc.compression()?
    } else {
        None
    };

    // Boolean flag: CLI presence sets it to true, otherwise use config
    let metadata = args.metadata || loaded_config.as_ref().is_some_and(|lc| lc.config.metadata);

    Ok(AssembleOptions {
        input_dir,
        output_file,
        columns,
        tile_size,
        resize_filter,
        unnumbered,
        compress,
        metadata,
    })
}

/// Save `options` as a config file whose paths are relative to its own directory.
fn write_config_file(options: &AssembleOptions, path: &Path) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config_dir = cwd.join(path.parent().unwrap_or_else(|| Path::new("")));
    let relative = |p: &PathBuf| make_relative(&cwd.join(p), &config_dir);

    let config = SheetConfig {
        input_dir: relative(&options.input_dir),
        output_file: relative(&options.output_file),
        columns: options.columns,
        tile_size: options.tile_size,
        resize_filter: options.resize_filter,
        unnumbered: options.unnumbered,
        compress: options.compress.map(|level| match level {
            CompressionLevel::Level(n) => CompressConfig::Level(n),
            CompressionLevel::Max => CompressConfig::Max("max".to_string()),
        }),
        metadata: options.metadata,
        ..SheetConfig::default()
    };

    save_config(&config, path)
}
