// pot/src/processors/output_dir.rs
use crate::core::{PotError, Result};
use std::path::Path;

/// Creates `path` unless it is already a directory.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    if path.exists() {
        return Err(PotError::InvalidParameter(format!(
            "Output path exists but is not a directory: {}",
            path.display()
        )));
    }

    log::debug!("Creating output directory {}", path.display());
    std::fs::create_dir_all(path)?;
    Ok(())
}
