//! RTL input enumeration

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Produce `<dir>/rtl1.v` .. `<dir>/rtl<count>.v` in index order.
///
/// Pure and deterministic; the files are not checked for existence here
/// (the synthesis tool reports missing inputs itself).
pub fn numbered_files(dir: &Path, count: u32) -> Vec<PathBuf> {
    (1..=count).map(|i| dir.join(format!("rtl{i}.v"))).collect()
}

/// Enumerate every `.v` file directly under `dir`, sorted by path for a
/// deterministic processing order.
pub fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read RTL directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read RTL directory: {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && path.extension() == Some(OsStr::new("v")) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
