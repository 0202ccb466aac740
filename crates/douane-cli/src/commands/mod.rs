pub mod classify;
pub mod inspect;
pub mod quality;

use anyhow::{Context, Result};
use douane_core::config::Config;
use std::path::{Path, PathBuf};

/// Load config and resolve the reference document path, honoring an
/// explicit `--data-file` override.
pub fn load_config_and_data_file(
    data_file: Option<&str>,
    config_file: Option<&Path>,
) -> Result<(Config, PathBuf)> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = Config::load_with_file(Some(&cwd), config_file)?;
    let path = match data_file {
        Some(explicit) => PathBuf::from(explicit),
        None => config.data_file_path(Some(&cwd)),
    };
    Ok((config, path))
}
