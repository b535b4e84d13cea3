//! Depscope CLI entry point.

use std::process::ExitCode;

use colored::Colorize;
use depscope::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
