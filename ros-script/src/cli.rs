use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ros-script")]
#[command(about = "Render RouterOS configuration scripts from TOML plans")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Log engine decisions to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Merge, canonicalize, and print or write the script for a plan.
    Render(RenderArgs),
    /// Show what a plan composes to, path by path.
    Inspect(InspectArgs),
    /// Show network, gateway, usable, and pool ranges of a subnet.
    Range(RangeArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Plan file (TOML).
    pub plan: PathBuf,
    /// Write the script here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Merge only; keep every `set` command as written.
    #[arg(long)]
    pub raw: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Plan file (TOML).
    pub plan: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Inspect the merged plan before canonicalization.
    #[arg(long)]
    pub raw: bool,
}

#[derive(Parser, Debug)]
pub struct RangeArgs {
    /// Subnet in a.b.c.d/len form.
    pub cidr: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
