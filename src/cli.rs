use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Notus gridded drought index mapper.
#[derive(Parser)]
#[command(
    name = "notus",
    version,
    about = "Standardized drought index mapper for gridded monthly climate series"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full index pipeline over a series file.
    Run(RunArgs),
    /// Print the drought severity legend.
    Legend,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "notus.toml")]
    pub config: PathBuf,

    /// Override input series file from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output grid path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
