//! wasm-bundle CLI
//!
//! Usage: wasm-bundle <COMMAND>
//!
//! Commands:
//!   build     Build the app or worker bundle (watching outside production)
//!   serve     Build the app and serve it
//!   describe  Print the resolved build description

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = ui::context::UiContext::new(cli.json, cli.verbose);

    match cli.command {
        Commands::Build {
            pipeline,
            project,
            no_watch,
        } => commands::build::cmd_build(pipeline.into(), &project, no_watch, ui),
        Commands::Serve { project, port } => commands::serve::cmd_serve(&project, port, ui),
        Commands::Describe { pipeline, project } => {
            commands::describe::cmd_describe(pipeline.into(), &project, ui)
        }
    }
}

/// Logs go to stderr so stdout stays clean for `--json` consumers.
/// `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wasm_bundle={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
