use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "migstat",
    about = "Reconcile local migrations against the versions applied on a database",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file (defaults to ./migstat.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show source and database status for every known migration version
    Status(StatusArgs),
}

#[derive(Args)]
pub struct StatusArgs {
    /// Directory holding migration files
    #[arg(short, long)]
    pub source: Option<PathBuf>,
    /// Applied-version ledger exported from a cluster member (repeatable)
    #[arg(short, long)]
    pub applied: Vec<PathBuf>,
    /// Descend into subdirectories of the source directory
    #[arg(short, long)]
    pub recursive: bool,
    /// Print pending/orphaned counts after the table
    #[arg(long)]
    pub summary: bool,
}
