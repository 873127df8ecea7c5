//! tictactoe_minimax - terminal front end
//!
//! Plays a human against the minimax engine, or runs the engine on its own.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tictactoe_minimax::{
    Board, EngineConfig, GameSession, GameStatus, Minimax, Player, Position, SessionError,
    Strategy, self_play,
};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            computer_first,
            strategy,
        } => {
            let mut config = with_strategy(config, strategy);
            if computer_first {
                config = config.with_computer_mark(Player::X);
            }
            let stdin = io::stdin();
            play_loop(GameSession::new(config), stdin.lock(), io::stdout())
        }
        Command::SelfPlay { strategy } => run_self_play(with_strategy(config, strategy)),
        Command::Analyze {
            board,
            to_move,
            json,
        } => run_analyze(config, &board, to_move, json),
    }
}

/// Reads the config file if one was given, defaults otherwise.
#[instrument]
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            debug!("No config file given, using defaults");
            Ok(EngineConfig::default())
        }
    }
}

fn with_strategy(config: EngineConfig, strategy: Option<Strategy>) -> EngineConfig {
    match strategy {
        Some(strategy) => config.with_strategy(strategy),
        None => config,
    }
}

/// Runs an interactive game until the input ends or the player quits.
fn play_loop<R: BufRead, W: Write>(mut session: GameSession, input: R, mut out: W) -> Result<()> {
    info!(human = %session.human(), computer = %session.computer(), "Starting game");
    writeln!(out, "You are {}. Enter 1-9 or a square name; r restarts, q quits.", session.human())?;
    print_board(&mut out, session.board())?;
    prompt(&mut out, &session)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => {}
            "q" | "quit" | "exit" => break,
            "r" | "restart" => {
                session.restart();
                writeln!(out, "New game.")?;
                print_board(&mut out, session.board())?;
            }
            text => match Position::from_input(text) {
                None => writeln!(out, "Not a square: {:?}", text)?,
                Some(position) => match session.play(position) {
                    Ok(turn) => {
                        if let Some(reply) = turn.computer {
                            writeln!(out, "Computer plays {}.", reply.position())?;
                        }
                        print_board(&mut out, session.board())?;
                    }
                    Err(SessionError::GameOver) => {
                        writeln!(out, "The game is over. Type r to play again.")?
                    }
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        writeln!(out, "{}", e)?;
                    }
                },
            },
        }

        prompt(&mut out, &session)?;
    }

    Ok(())
}

fn prompt<W: Write>(out: &mut W, session: &GameSession) -> Result<()> {
    match session.status() {
        GameStatus::InProgress => write!(out, "{} > ", session.human())?,
        GameStatus::Won(player) if player == session.human() => writeln!(out, "You win!")?,
        GameStatus::Won(_) => writeln!(out, "Computer wins.")?,
        GameStatus::Draw => writeln!(out, "It's a draw!")?,
    }
    out.flush()?;
    Ok(())
}

fn print_board<W: Write>(out: &mut W, board: &Board) -> Result<()> {
    writeln!(out, "\n{}\n", board)?;
    Ok(())
}

fn run_self_play(config: EngineConfig) -> Result<()> {
    let report = self_play(config.minimax()).context("Self-play failed")?;
    for mv in &report.moves {
        println!("{}", mv);
    }
    println!("\n{}\n\n{}", report.board, report.outcome);
    Ok(())
}

fn run_analyze(config: EngineConfig, board: &str, to_move: Player, json: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;

    // Score from the mover's side: positive is good for `to_move`.
    let engine = Minimax::new(to_move, *config.strategy());
    let moves = engine.scored_moves(&board, to_move)?;
    let best = engine.best_move(&board, to_move)?;

    if json {
        let report = serde_json::json!({
            "board": board.compact(),
            "to_move": to_move,
            "best": best,
            "moves": moves,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", board);
        for scored in &moves {
            let marker = if scored.position == best { " *" } else { "" };
            println!(
                "{} ({}): {:+}{}",
                scored.position,
                scored.position.to_index() + 1,
                scored.score,
                marker
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        play_loop(GameSession::default(), Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_play_loop_reports_computer_move() {
        let output = run("5\nq\n");
        assert!(output.contains("Computer plays"));
    }

    #[test]
    fn test_play_loop_rejects_garbage_and_occupied() {
        let output = run("banana\n5\n5\nq\n");
        assert!(output.contains("Not a square"));
        assert!(output.contains("already occupied"));
    }

    #[test]
    fn test_play_loop_restart() {
        let output = run("5\nr\nq\n");
        assert!(output.contains("New game."));
    }

    #[test]
    fn test_with_strategy_overrides_only_when_given() {
        let config = EngineConfig::default();
        assert_eq!(with_strategy(config, None), config);
        assert_eq!(
            *with_strategy(config, Some(Strategy::AlphaBeta)).strategy(),
            Strategy::AlphaBeta
        );
    }
}
