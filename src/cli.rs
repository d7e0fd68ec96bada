use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use wasm_bundle::PipelineKind;

/// wasm-bundle - build, watch and serve WASM app and worker bundles
#[derive(Parser, Debug)]
#[command(name = "wasm-bundle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineArg {
    App,
    Worker,
}

impl From<PipelineArg> for PipelineKind {
    fn from(arg: PipelineArg) -> Self {
        match arg {
            PipelineArg::App => PipelineKind::App,
            PipelineArg::Worker => PipelineKind::Worker,
        }
    }
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Build mode; only "production" enables production behaviour
    #[arg(long)]
    pub mode: Option<String>,

    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Config file (defaults to wasm-bundle.toml in the project root)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a pipeline; keeps rebuilding on changes outside production
    Build {
        #[arg(value_enum)]
        pipeline: PipelineArg,

        #[command(flatten)]
        project: ProjectArgs,

        /// Build once even when the mode would watch
        #[arg(long)]
        no_watch: bool,
    },

    /// Build the app and serve its bundle directory
    Serve {
        #[command(flatten)]
        project: ProjectArgs,

        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the resolved build description without building
    Describe {
        #[arg(value_enum)]
        pipeline: PipelineArg,

        #[command(flatten)]
        project: ProjectArgs,
    },
}
