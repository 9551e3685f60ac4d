// src/source/file.rs
// =============================================================================
// Reads HTML from the local filesystem.
//
// Existence is checked separately from reading so the CLI can validate all
// of its paths before doing any real work.
// =============================================================================

use std::path::Path;

use tracing::debug;

use crate::error::{GradeError, Result};

// Fails with NotFound if nothing exists at `path`
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(GradeError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

// Reads the whole file as text
//
// Invalid UTF-8 is replaced rather than rejected: the HTML parser is
// forgiving, so the loader is too.
pub fn read_file(path: &Path) -> Result<String> {
    ensure_exists(path)?;

    let bytes = std::fs::read(path).map_err(|source| GradeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("read {} bytes from {}", bytes.len(), path.display());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
