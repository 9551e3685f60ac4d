// src/checker/report.rs
// =============================================================================
// Renders CheckResults as JSON.
//
// Output format: an object with 4-space indentation and a trailing
// newline, e.g.
//
//   {
//       "#x": true,
//       "div": true,
//       "span": false
//   }
// =============================================================================

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::evaluate::CheckResults;

const INDENT: &[u8] = b"    ";

// Renders the results as indented JSON (no trailing newline)
pub fn render(results: &CheckResults) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// Writes the rendered report followed by a newline
//
// Parameters:
//   results: what to print
//   out: where to print it (stdout in main.rs, a Vec<u8> in tests)
pub fn write_report<W: Write>(results: &CheckResults, mut out: W) -> anyhow::Result<()> {
    let json = render(results)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
