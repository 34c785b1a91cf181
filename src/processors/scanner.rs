// pot/src/processors/scanner.rs
use crate::utils::has_extension;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the files directly inside `dir` whose extension matches, sorted by
/// name. An unreadable directory yields an empty list and a diagnostic on `out`.
pub fn scan_directory<W: Write + ?Sized>(
    dir: &Path,
    extension: &str,
    out: &mut W,
) -> io::Result<Vec<PathBuf>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut paths = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                writeln!(out, "Could not read directory {}: {}", dir.display(), e)?;
                return Ok(Vec::new());
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            paths.push(entry.into_path());
        }
    }

    log::debug!(
        "Found {} .{} files in {}",
        paths.len(),
        extension,
        dir.display()
    );

    Ok(paths)
}
