//! Service Capability Browser - Entry Point
//!
//! Binary entry point for the `scb` command line. Lives in the `scb` facade
//! crate next to the library so the CLI can be tested through `scb::cli`.

// Force-link scb-providers to ensure linkme registrations are included
extern crate scb_providers;

use clap::Parser;
use scb::cli::{Cli, Output, exit_code_for_error, load_config, run};
use scb_infrastructure::logging::init_logging;

async fn run_cli(cli: &Cli) -> anyhow::Result<Output> {
    let config = load_config(cli)?;
    init_logging(&config.logging)?;
    run(&cli.command, config).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_cli(&cli).await {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_code_for_error(&err));
        }
    }
}
