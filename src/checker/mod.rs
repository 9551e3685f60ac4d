// src/checker/mod.rs
// =============================================================================
// This module contains all grading logic.
//
// Submodules:
// - document: Parses HTML and answers selector queries
// - checks: Loads and sorts the checks file
// - evaluate: Runs the checks against a document
// - report: Prints the results as JSON
//
// The flow is: load_checks + Document::parse -> evaluate -> write_report
// =============================================================================

mod checks;
mod document;
mod evaluate;
mod report;

pub use checks::{load_checks, CheckList};
pub use document::Document;
pub use evaluate::evaluate;
pub use report::write_report;
