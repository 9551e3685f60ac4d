// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate every input before doing any real work
// 3. Load checks + HTML, evaluate, print the JSON report
// 4. Exit with proper code (0 = graded, 1 = anything went wrong)
//
// Every failure in the pipeline comes back here as an error value; this
// file is the only place that decides to end the process.
// =============================================================================

mod checker; // src/checker/ - parsing, checks, evaluation, report
mod cli; // src/cli.rs - command-line parsing
mod error; // src/error.rs - GradeError
mod logging; // src/logging.rs - tracing setup
mod serve; // src/serve/ - static file server
mod source; // src/source/ - file and URL loading

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};

use cli::{Cli, Commands, GradeArgs};
use source::Source;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole error chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, root }) => {
            logging::init_logging(if cli.verbose { "debug" } else { "info" });
            serve::start(port, root).await
        }
        None => {
            logging::init_logging(if cli.verbose { "debug" } else { "warn" });
            handle_grade(&cli.grade).await
        }
    }
}

// Runs the grading pipeline:
//   validate -> load checks -> load source -> parse -> evaluate -> report
async fn handle_grade(args: &GradeArgs) -> Result<()> {
    // Validation first: nothing below runs if a path or the URL is bad
    source::ensure_exists(&args.checks)?;
    let source = Source::resolve(&args.file, args.url.as_deref())?;

    let checks = checker::load_checks(&args.checks)?;
    if checks.is_empty() {
        warn!("{} has no checks, the report will be empty", args.checks.display());
    }
    debug!("{} check(s) to run", checks.len());

    match &source {
        Source::File(path) => info!("Grading file {}", path.display()),
        Source::Url(url) => info!("Grading URL {}", url),
    }

    let html = source::load_source(&source, Duration::from_secs(args.timeout)).await?;
    let document = checker::Document::parse(&html);

    let results = checker::evaluate(&document, &checks);
    let passed = results.iter().filter(|(_, present)| *present).count();
    debug!("{}/{} check(s) present", passed, results.len());

    checker::write_report(&results, std::io::stdout().lock())
}
