//! A human-versus-computer game session.
//!
//! The session owns the board and whose turn it is. Every human move is
//! validated by the rules engine before anything changes, and the
//! computer answers within the same call, so callers only ever observe
//! positions where it is the human's turn or the game is over.

use crate::config::EngineConfig;
use crate::tictactoe::invariants::{BoardInvariants, InvariantSet};
use crate::tictactoe::{
    Board, Minimax, Move, MoveError, Outcome, Player, Position, SearchError, apply_move, evaluate,
};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl From<Option<Outcome>> for GameStatus {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            None => GameStatus::InProgress,
            Some(Outcome::Winner(player)) => GameStatus::Won(player),
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// A rejected session action. The session is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// It is not this player's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// The rules engine rejected the move.
    #[from]
    #[display("{}", _0)]
    Move(MoveError),

    /// The search engine had nothing to play.
    #[from]
    #[display("{}", _0)]
    Search(SearchError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            SessionError::Search(e) => Some(e),
            SessionError::GameOver | SessionError::NotYourTurn(_) => None,
        }
    }
}

/// What happened during one call to [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The human's move.
    pub human: Move,
    /// The computer's reply, absent if the human's move ended the game.
    pub computer: Option<Move>,
    /// Status after both moves.
    pub status: GameStatus,
}

/// A game between a human and the minimax engine.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    status: GameStatus,
    human: Player,
    engine: Minimax,
}

impl GameSession {
    /// Starts a game. If the computer plays X it has already moved.
    #[instrument]
    pub fn new(config: EngineConfig) -> Self {
        let mut session = Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            human: config.human_mark(),
            engine: config.minimax(),
        };
        session.open();
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Mark the human plays.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Mark the computer plays.
    pub fn computer(&self) -> Player {
        self.engine.maximizer()
    }

    /// Plays the human's move by board index (0-8).
    ///
    /// # Errors
    ///
    /// Same as [`play`](Self::play), plus [`MoveError::OutOfRange`] for
    /// an index that names no square.
    pub fn play_index(&mut self, index: usize) -> Result<Turn, SessionError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.play(position)
    }

    /// Plays the human's move, then the computer's reply.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] once the game is won or drawn.
    /// - [`SessionError::NotYourTurn`] if the computer is to move.
    /// - [`SessionError::Move`] if the square is taken.
    #[instrument(skip(self), fields(board = %self.board.compact()))]
    pub fn play(&mut self, position: Position) -> Result<Turn, SessionError> {
        if self.status.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.to_move != self.human {
            return Err(SessionError::NotYourTurn(self.human));
        }

        let board = apply_move(&self.board, position.to_index(), self.human)?;
        let human = Move::new(self.human, position);
        self.commit(human, board);

        let computer = if self.status.is_over() {
            None
        } else {
            Some(self.reply()?)
        };

        if self.status.is_over() {
            info!(status = %self.status, "Game over");
        }

        Ok(Turn {
            human,
            computer,
            status: self.status,
        })
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.open();
    }

    /// Lets the computer take the first move when it plays X.
    fn open(&mut self) {
        if self.to_move == self.computer() {
            // An empty board always has a move.
            if let Err(e) = self.reply() {
                warn!(error = %e, "Computer could not open");
            }
        }
    }

    /// Computes and applies the computer's move.
    fn reply(&mut self) -> Result<Move, SessionError> {
        let mark = self.computer();
        let position = self.engine.best_move(&self.board, mark)?;
        let board = apply_move(&self.board, position.to_index(), mark)?;
        let reply = Move::new(mark, position);
        self.commit(reply, board);
        Ok(reply)
    }

    fn commit(&mut self, mv: Move, board: Board) {
        debug!(%mv, "Move applied");
        self.board = board;
        self.status = evaluate(&self.board).into();
        self.to_move = mv.player().opponent();
        debug_assert!(
            BoardInvariants::check_all(&self.board).is_ok(),
            "Board invariants violated"
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// A finished engine-versus-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayReport {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Final position.
    pub board: Board,
    /// How the game ended.
    pub outcome: Outcome,
}

/// Plays `engine` against itself from an empty board.
///
/// Each side asks the same engine for its move, so X minimizes and O
/// maximizes (or the other way round, per the engine's maximizer).
///
/// # Errors
///
/// Propagates search or move errors, which optimal play from an empty
/// board never produces.
#[instrument]
pub fn self_play(engine: Minimax) -> Result<SelfPlayReport, SessionError> {
    let mut board = Board::new();
    let mut to_move = Player::X;
    let mut moves = Vec::with_capacity(9);

    loop {
        if let Some(outcome) = evaluate(&board) {
            info!(%outcome, moves = moves.len(), "Self-play finished");
            return Ok(SelfPlayReport {
                moves,
                board,
                outcome,
            });
        }

        let position = engine.best_move(&board, to_move)?;
        board = apply_move(&board, position.to_index(), to_move)?;
        moves.push(Move::new(to_move, position));
        to_move = to_move.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Square;

    #[test]
    fn test_new_session_waits_for_human_x() {
        let session = GameSession::default();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.to_move(), Player::X);
        assert_eq!(session.human(), Player::X);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_computer_opens_when_playing_x() {
        let session = GameSession::new(EngineConfig::default().with_computer_mark(Player::X));
        assert_eq!(session.to_move(), Player::O);
        assert_eq!(session.board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(session.board().count(Player::X), 1);
    }

    #[test]
    fn test_restart_lets_computer_open_again() {
        let mut session = GameSession::new(EngineConfig::default().with_computer_mark(Player::X));
        session.play(Position::Center).unwrap();
        session.restart();
        assert_eq!(session.to_move(), session.human());
        assert_eq!(session.board().count(Player::X), 1);
        assert_eq!(session.board().count(Player::O), 0);
    }

    #[test]
    fn test_play_gets_a_reply() {
        let mut session = GameSession::default();
        let turn = session.play(Position::Center).unwrap();
        assert_eq!(turn.human, Move::new(Player::X, Position::Center));
        let reply = turn.computer.unwrap();
        assert_eq!(reply.player(), Player::O);
        assert_eq!(session.board().get(reply.position()), Square::Occupied(Player::O));
        assert_eq!(session.to_move(), Player::X);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut session = GameSession::default();
        let turn = session.play(Position::Center).unwrap();
        let reply = turn.computer.unwrap().position();
        let before = *session.board();

        assert_eq!(
            session.play(reply),
            Err(SessionError::Move(MoveError::SquareOccupied(reply)))
        );
        assert_eq!(
            session.play_index(12),
            Err(SessionError::Move(MoveError::OutOfRange(12)))
        );
        assert_eq!(session.board(), &before);
        assert_eq!(session.to_move(), Player::X);
    }

    #[test]
    fn test_status_from_outcome() {
        assert_eq!(GameStatus::from(None), GameStatus::InProgress);
        assert_eq!(
            GameStatus::from(Some(Outcome::Winner(Player::O))),
            GameStatus::Won(Player::O)
        );
        assert!(GameStatus::Draw.is_over());
    }
}
