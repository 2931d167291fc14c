use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[x] todos v", env!("CARGO_PKG_VERSION"), " - a to-do list, by category"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read config from this file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items, optionally for one category
    List(ListArgs),
    /// List the categories in use
    Categories,
    /// Apply a script of commands to the starting items and print the result
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show items in this category
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file with one JSON command per line (`-` for stdin)
    pub script: String,
    /// Only show items in this category
    #[arg(long)]
    pub category: Option<String>,
}
