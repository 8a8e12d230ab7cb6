// src/sitemap/output.rs
// =============================================================================
// Small helpers shared by the index and the submaps:
// - the wall-clock timestamp that goes into every <lastmod>
// - writing a finished document into the output directory
//
// Documents are always built completely in memory first, so a failed write
// never leaves a half-written file open behind us.
// =============================================================================

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory (relative to the working directory) that documents are saved to
/// unless the caller picks another one.
pub const DEFAULT_OUTPUT_DIR: &str = "maps";

// 2006-01-02T15:04:05-07:00 - numeric offset, no fractions, never "Z"
const TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Current local time in the `<lastmod>` layout.
///
/// Computed fresh on every call; callers never cache it across a render.
pub fn formatted_now() -> String {
    Local::now().format(TIME_LAYOUT).to_string()
}

// Writes `contents` to `dir/filename`, creating `dir` (and any missing
// parents) first.
//
// Returns the path that was written so the caller can report it.
pub fn write_document(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    let path = dir.join(filename);
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote sitemap document");
    Ok(path)
}
