mod agents;
mod cli;
mod docs;
mod error;
mod utils;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use error::DocverError;
use std::process;
use workflow::{SetVersionOptions, SyncOptions};

const USAGE: &str = "Usage: docver <VERSION> (e.g. 0.7 or 1.2.3)";

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var("DOCVER_VERBOSE", "1");
        }
    }

    let options = SetVersionOptions {
        version: cli.target_version.as_deref(),
        website_dir: &cli.website_dir,
        config_file: &cli.config,
        versions_file: &cli.versions_file,
        sync: SyncOptions {
            lenient: cli.lenient,
            dry_run: cli.dry_run,
        },
    };

    match workflow::execute_set_version(&options) {
        Ok(()) => {}
        Err(DocverError::InvalidVersion(_)) => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
