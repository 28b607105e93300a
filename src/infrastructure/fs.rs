//! Local file output
//!
//! Artifacts are written with the tempfile + rename pattern so a failed run
//! never leaves a half-written image behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::FmResult;

/// Write content to a file atomically, creating parent directories
pub fn atomic_write(path: &Path, content: &[u8]) -> FmResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
