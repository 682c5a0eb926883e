// profanity/src/main.rs
//! `profanity` entry point.
//!
//! Parses the command line, installs the logger and dispatches to a command.

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use profanity::cli::{Cli, Commands};
use profanity::commands::{filter, scan, sources};
use profanity::logger;
use profanity::ui::output_format::error_msg;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    log::info!("profanity started. Version: {}", env!("CARGO_PKG_VERSION"));

    let outcome = match &args.command {
        Commands::Filter(cmd) => filter::run_filter(cmd, args.quiet).await,
        Commands::Scan(cmd) => scan::run_scan(cmd, args.quiet),
        Commands::Sources => sources::run_sources(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
