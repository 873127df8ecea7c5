//! Tic-tac-toe against an opponent that never loses.
//!
//! # Architecture
//!
//! - **Rules**: board, positions, move application and terminal-state detection
//! - **Search**: minimax (optionally alpha-beta pruned) move selection
//! - **Session**: human-versus-computer turn handling
//! - **Config**: TOML-backed engine settings
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Board, Minimax, Player, Position};
//!
//! // O to move: take the open square on the top row.
//! let board: Board = "OO.XX....".parse().unwrap();
//! let engine = Minimax::default();
//! assert_eq!(engine.best_move(&board, Player::O), Ok(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod session;
mod tictactoe;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Session management
pub use session::{GameSession, GameStatus, SelfPlayReport, SessionError, Turn, self_play};

// Crate-level exports - Game types
pub use tictactoe::{
    Board, BoardParseError, Minimax, Move, MoveError, Outcome, Player, Position, ScoredMove,
    SearchError, Square, Strategy, apply_move, evaluate, is_full, new_board,
};

// Crate-level exports - Rules and invariants for finer-grained use
pub use tictactoe::invariants;
pub use tictactoe::rules::{LINES, check_winner};
pub use tictactoe::search::{SearchStats, WIN_SCORE};
