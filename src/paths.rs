use std::path::PathBuf;

use anyhow::{Context, Result};

pub fn default_library_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("unable to resolve data directory")?;
    Ok(base.join("vidcat").join("videos.txt"))
}
