use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Aether: a drifting starfield with a waitlist form behind it.
#[derive(Parser, Debug)]
#[command(name = "aether", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `debug` or `aether_scene=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit one waitlist entry through the configured delivery.
    Join(JoinArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct JoinArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Instagram handle (optional).
    #[arg(long, default_value = "")]
    pub instagram: String,

    #[arg(long)]
    pub country: String,

    /// Write the record as CSV into this directory instead of the
    /// configured delivery.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
