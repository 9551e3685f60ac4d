// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two ways to run the tool:
//
//   html-grader --checks checks.json --file index.html
//   html-grader --checks checks.json --url http://localhost:5000/
//   html-grader serve --port 5000
//
// Grading is the default (no subcommand); `serve` starts the static server.
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const CHECKSFILE_DEFAULT: &str = "checks.json";
pub const HTMLFILE_DEFAULT: &str = "index.html";
pub const PORT_DEFAULT: u16 = 5000;

// The whole CLI
//
// The grading flags live at the top level; `serve` ignores them.
#[derive(Parser, Debug)]
#[command(
    name = "html-grader",
    version,
    about = "Grade an HTML file or page for the presence of CSS selectors",
    long_about = "html-grader loads a list of CSS selectors from a JSON file, checks each one \
                  against a local HTML file or a remote page, and prints a JSON object \
                  mapping every selector to true (found) or false (missing)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub grade: GradeArgs,

    /// Log debug output (HTTP status, headers, body chunks) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// Flags for the default grading run
#[derive(Args, Debug, Clone)]
pub struct GradeArgs {
    /// Path to the checks file (a JSON array of selectors)
    #[arg(short, long, value_name = "CHECK_FILE", default_value = CHECKSFILE_DEFAULT)]
    pub checks: PathBuf,

    /// Path to the HTML file to grade (ignored when --url is given)
    #[arg(short, long, value_name = "HTML_FILE", default_value = HTMLFILE_DEFAULT)]
    pub file: PathBuf,

    /// URL of the HTML page to grade
    #[arg(short, long)]
    pub url: Option<String>,

    /// Seconds to wait for the whole HTTP request before giving up
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve index.html and the files next to it over HTTP
    ///
    /// Example: html-grader serve --port 8080 --root ./site
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = PORT_DEFAULT)]
        port: u16,

        /// Directory to serve files from
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["html-grader"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.grade.checks, PathBuf::from("checks.json"));
        assert_eq!(cli.grade.file, PathBuf::from("index.html"));
        assert_eq!(cli.grade.url, None);
        assert_eq!(cli.grade.timeout, 30);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["html-grader", "-c", "c.json", "-f", "a.html", "-u", "http://x.io"]);
        assert_eq!(cli.grade.checks, PathBuf::from("c.json"));
        assert_eq!(cli.grade.file, PathBuf::from("a.html"));
        assert_eq!(cli.grade.url.as_deref(), Some("http://x.io"));
    }

    #[test]
    fn test_serve_subcommand() {
        let cli = Cli::parse_from(["html-grader", "serve", "--port", "8080"]);
        match cli.command {
            Some(Commands::Serve { port, root }) => {
                assert_eq!(port, 8080);
                assert_eq!(root, PathBuf::from("."));
            }
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn test_verbose_after_subcommand() {
        let cli = Cli::parse_from(["html-grader", "serve", "-v"]);
        assert!(cli.verbose);
    }
}
