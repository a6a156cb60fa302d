// SPDX-License-Identifier: AGPL-3.0-or-later
//! Roadmap CLI - validate, render and export roadmap outlines
//!
//! Usage: roadmap <COMMAND>
//!
//! Commands:
//!   validate  Check a roadmap document against the schema
//!   render    Print the roadmap as a tree or Mermaid diagram
//!   export    Write JSON and diagram files to a directory
//!   bundle    Print roadmap and diagram as one JSON object

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("❌ {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Validate { input } => commands::validate(&input),
        Commands::Render { input, format } => commands::render(&input, format.into(), &config),
        Commands::Export {
            input,
            output_dir,
            tree,
        } => commands::export(&input, &output_dir, tree, &config),
        Commands::Bundle { input } => commands::bundle(&input, &config),
    }
}

// Logs go to stderr so stdout carries only rendered output
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
