//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};

/// Tic-tac-toe minimax engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Optimal-move oracle for tic-tac-toe positions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "tictactoe_minimax.toml")]
    pub config: std::path::PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report turn, outcome and best move for a position
    Analyze {
        /// Board in row notation, e.g. "XO./.X./..."
        board: String,

        /// Show the verdict for every legal move
        #[arg(short, long)]
        explain: bool,
    },

    /// Let the engine play both sides until the game ends
    PlayOut {
        /// Starting board (defaults to the empty board)
        board: Option<String>,
    },
}
