use anyhow::Result;
use clap::Parser;
use colored::control::set_override as set_color_override;
use e2e_triage::extract::extract_failures;
use e2e_triage::load::load;
use e2e_triage::report::{print_human, render_json};
use std::path::Path;
use tracing::info;

/// Read from the current working directory. Not configurable.
const REPORT_PATH: &str = "test-results.json";

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Extract failed test cases from a test-results.json run report"
)]
struct Cli {
    /// Print a per-failure summary to stderr in addition to the JSON on stdout
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Suppress the stderr summary, keeping warnings and errors only
    #[arg(short = 'q', long = "silent")]
    silent: bool,

    /// Disable colored stderr output
    #[arg(long = "no-color")]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "e2e_triage=info".to_string())
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "e2e_triage=warn".to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        set_color_override(false);
    }

    let Some(report) = load(Path::new(REPORT_PATH)) else {
        // Fixed diagnostic contract: stdout, exit status 1
        println!("Failed to read {REPORT_PATH}");
        std::process::exit(1);
    };

    let failures = extract_failures(&report);
    println!("{}", render_json(&failures)?);

    if cli.verbose && !cli.silent {
        info!(
            "{} failure(s) extracted from {}",
            failures.len(),
            REPORT_PATH
        );
        print_human(&failures);
    }

    Ok(())
}
