// src/checker/document.rs
// =============================================================================
// This module turns raw HTML text into something we can query.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup still produces a tree
//
// Rust concepts:
// - Newtype wrappers: Document hides which parser we use
// - Result<T, E>: Selector parsing can fail, HTML parsing cannot
// =============================================================================

use scraper::{Html, Selector};

use crate::error::{GradeError, Result};

// A parsed HTML document
//
// Parsing never fails: html5ever recovers from unclosed tags, stray text,
// missing <html>/<body> and so on the same way a browser would.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document (best effort, never fails)
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Counts the elements matching a selector
    ///
    /// Selectors are parsed up front with parse_selector, so a bad one
    /// fails before any document is loaded.
    pub fn query(&self, selector: &Selector) -> usize {
        self.html.select(selector).count()
    }
}

// Parses one selector, keeping the original text in the error
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| GradeError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
