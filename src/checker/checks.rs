// src/checker/checks.rs
// =============================================================================
// This module loads the list of checks to run.
//
// A checks file is a JSON array of CSS selector strings:
//
//   ["h1", "#footer", "a[href]", "meta[name=description]"]
//
// After loading we sort the list. The sort order decides the key order of
// the JSON report, so two runs over the same selectors always print the
// same bytes no matter how the file was ordered.
// =============================================================================

use std::path::Path;

use scraper::Selector;
use tracing::debug;

use super::document::parse_selector;
use crate::error::{GradeError, Result};

// One selector from the checks file, kept both as text (the report key)
// and pre-parsed (what we actually run against the document)
#[derive(Debug, Clone)]
pub struct Check {
    pub text: String,
    pub selector: Selector,
}

// The sorted list of checks for one run
#[derive(Debug, Clone)]
pub struct CheckList {
    checks: Vec<Check>,
}

impl CheckList {
    /// Builds a check list from selector strings
    ///
    /// Sorts ascending by byte order and parses every selector up front, so
    /// a typo fails before we touch the network.
    pub fn new(mut selectors: Vec<String>) -> Result<Self> {
        selectors.sort();

        let checks = selectors
            .into_iter()
            .map(|text| {
                let selector = parse_selector(&text)?;
                Ok(Check { text, selector })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { checks })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

// Loads and sorts the checks file
//
// Errors:
//   NotFound        - the file does not exist
//   Io              - it exists but could not be read
//   MalformedChecks - not a JSON array of strings
//   InvalidSelector - an entry is not a CSS selector
pub fn load_checks(path: &Path) -> Result<CheckList> {
    if !path.exists() {
        return Err(GradeError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read(path).map_err(|source| GradeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let selectors: Vec<String> =
        serde_json::from_slice(&raw).map_err(|source| GradeError::MalformedChecks {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("loaded {} check(s) from {}", selectors.len(), path.display());

    CheckList::new(selectors)
}
