use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskscan", about = concat!("taskscan v", env!("CARGO_PKG_VERSION"), " - browse and filter your task list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of ./taskscan.toml
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in, fetch, and print every task
    List,
    /// Print the tasks matching a search string
    Search(SearchArgs),
    /// Print the tasks matching a scanned QR payload
    Scan(ScanArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in title, description, task and color code (case-insensitive)
    pub query: String,
}

#[derive(Args)]
pub struct ScanArgs {
    /// The decoded QR payload
    pub payload: String,
}
