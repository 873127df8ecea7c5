//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};
use tictactoe_minimax::{Player, Strategy};

/// Tic-tac-toe against a minimax opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Play tic-tac-toe against an optimal minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on the terminal
    Play {
        /// Let the computer play X and move first
        #[arg(long)]
        computer_first: bool,

        /// Search strategy (exhaustive or alpha-beta)
        #[arg(long)]
        strategy: Option<Strategy>,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Search strategy (exhaustive or alpha-beta)
        #[arg(long)]
        strategy: Option<Strategy>,
    },

    /// Score every legal move on a board
    Analyze {
        /// Board as 9 row-major squares, e.g. "OO.XX...." (`.` or `_` for empty)
        board: String,

        /// Mark to move
        #[arg(long)]
        to_move: Player,

        /// Print the scores as JSON
        #[arg(long)]
        json: bool,
    },
}
