//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

/// SDGデータセットをPostgreSQLに一括投入するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "sdg-loader")]
#[command(
    about = "Create the SDG table and bulk-load the dataset CSV into PostgreSQL",
    long_about = None
)]
pub struct Args {
    /// Dry run mode - load into an in-memory table instead of PostgreSQL
    #[arg(long)]
    pub dry_run: bool,

    /// Source CSV path (overrides source_path in the config file)
    #[arg(long)]
    pub source: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "./sdg-loader.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the table and import the source CSV (default)
    Load,
    /// Write every row of the table to a CSV file
    Export {
        /// Output CSV path
        #[arg(short, long)]
        output: String,
    },
}

impl Args {
    /// サブコマンド省略時は `load`
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Load)
    }
}
