//! solano-fetch CLI - Download artifacts từ Solano CI
//!
//! Tìm session passed gần nhất của một branch và in lệnh `curl` cho từng file
//! artifact trong allow-list. Output trên stdout có thể pipe thẳng vào `sh`.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use solano_fetch::RunError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Fetch(args) => cli::commands::fetch(args),
        Commands::Init { config, force } => cli::commands::init(config, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Log ra stderr để stdout chỉ chứa lệnh curl
fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("solano_fetch={}", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// In lỗi ra stderr và chọn exit code
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<RunError>() {
        Some(run_err) if !run_err.is_fatal() => {
            eprintln!("{}", run_err.to_string().yellow());
            ExitCode::from(run_err.exit_code())
        }
        _ => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
