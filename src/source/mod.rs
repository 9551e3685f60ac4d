// src/source/mod.rs
// =============================================================================
// This module decides where the HTML comes from and loads it.
//
// Submodules:
// - file: Local files (synchronous read)
// - remote: URL validation and the single HTTP GET
//
// Resolving a Source is pure validation: it checks paths and URLs and
// returns an error instead of exiting, so main.rs stays the only place
// that ends the process.
// =============================================================================

mod file;
mod remote;

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::error::{GradeError, Result};

pub use file::ensure_exists;

// Where to read the document from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A local HTML file (also used for file:// URLs)
    File(PathBuf),
    /// An http or https URL to GET
    Url(Url),
}

impl Source {
    /// Picks and validates the source for one run
    ///
    /// A URL, when given, wins over the file path. Nothing is read or
    /// fetched here.
    pub fn resolve(file: &Path, url: Option<&str>) -> Result<Self> {
        let Some(raw) = url else {
            ensure_exists(file)?;
            return Ok(Source::File(file.to_path_buf()));
        };

        let url = remote::validate_url(raw)?;
        match url.scheme() {
            "http" | "https" => Ok(Source::Url(url)),
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| GradeError::InvalidUrl { url: raw.to_string() })?;
                ensure_exists(&path)?;
                Ok(Source::File(path))
            }
            _ => Err(GradeError::UnsupportedScheme { url: raw.to_string() }),
        }
    }
}

// Loads the raw HTML for a source
//
// Only the Url branch actually suspends; reading a file is synchronous.
pub async fn load_source(source: &Source, timeout: Duration) -> Result<String> {
    match source {
        Source::File(path) => file::read_file(path),
        Source::Url(url) => remote::fetch_url(url, timeout).await,
    }
}
