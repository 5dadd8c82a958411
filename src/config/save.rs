use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SheetConfig;

/// Save a config to a JSON file with pretty formatting.
pub fn save_config(config: &SheetConfig, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config)
        .with_context(|| "failed to serialize config to JSON")?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    Ok(())
}

/// Express `path` relative to the directory a config file is saved in.
///
/// Both paths are expected to be absolute. Sibling directories are reached
/// with `..`, so a config saved under `configs/` can still point at
/// `../images`. A path equal to `base` becomes `"."`. When the two share no
/// root (e.g., different drives on Windows), the original path is returned.
pub fn make_relative(path: &Path, base: &Path) -> String {
    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();
    let shares_root = path_parts.first().is_some() && path_parts.first() == base_parts.first();
    if !shares_root {
        return path.to_string_lossy().into_owned();
    }

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push(Component::ParentDir);
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        relative.to_string_lossy().into_owned()
    }
}
