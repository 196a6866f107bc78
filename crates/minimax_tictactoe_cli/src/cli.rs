//! Command-line interface for minimax_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (used when it exists)
    #[arg(short, long, default_value = "minimax_tictactoe.toml")]
    pub config: PathBuf,

    /// Board side length (overrides config)
    #[arg(long)]
    pub side: Option<usize>,

    /// Let the human move first (overrides config)
    #[arg(long)]
    pub human_first: bool,

    /// Seed for the computer's random opening (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Abort a search after this many positions (overrides config)
    #[arg(long)]
    pub max_nodes: Option<u64>,
}
