//! Minimax tic-tac-toe - terminal driver
//!
//! Reads `row col` lines from stdin and plays them against the engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use minimax_tictactoe::{Coord, EngineError, Game, GameConfig, Mark, Outcome};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,minimax_tictactoe=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;
    let mut game = Game::new(config)?;
    run(&mut game, io::stdin().lock(), io::stdout().lock())
}

/// Reads the config file if present and applies CLI overrides.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = if cli.config.exists() {
        GameConfig::from_file(&cli.config)?
    } else {
        info!("Config file not found, using defaults");
        GameConfig::default()
    };

    if let Some(side) = cli.side {
        config = config.with_side(side);
    }
    if cli.human_first {
        config = config.with_first(Mark::Human);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(limit) = cli.max_nodes {
        config = config.with_max_nodes(limit);
    }
    config.validate()?;

    debug!(?config, "Effective configuration");
    Ok(config)
}

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Play(Coord),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "restart" | "r" => return Some(Command::Restart),
        "quit" | "q" | "exit" => return Some(Command::Quit),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Play(Coord::new(row, col)))
}

fn result_text(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::HumanWins => Some("Nice, You Win."),
        Outcome::ComputerWins => Some("Better Luck Next Time!"),
        Outcome::Draw => Some("Tie!"),
        Outcome::Undecided => None,
    }
}

/// Lets the computer move if it is its turn, then shows the board.
fn computer_turn(game: &mut Game, out: &mut impl Write) -> Result<()> {
    if game.to_move() == Mark::Computer && !game.outcome().is_terminal() {
        match game.play_computer() {
            Ok(choice) => writeln!(out, "Computer plays {}", choice.coord())?,
            Err(e @ EngineError::SearchBudgetExhausted { .. }) => {
                return search_aborted(&e, game, out);
            }
            Err(e) => return Err(e.into()),
        }
    }
    show(game, out)
}

/// Reports a capped search; the session stays open for `restart` or `quit`.
fn search_aborted(e: &EngineError, game: &Game, out: &mut impl Write) -> Result<()> {
    warn!(error = %e, "Computer search aborted");
    writeln!(out, "{}", game.board())?;
    writeln!(out, "{e}\nType `restart` to play again or `quit` to leave.")?;
    out.flush()?;
    Ok(())
}

fn show(game: &Game, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", game.board())?;
    match result_text(game.outcome()) {
        Some(text) => writeln!(out, "{text}\nType `restart` to play again or `quit` to leave.")?,
        None => write!(out, "Your move (row col): ")?,
    }
    out.flush()?;
    Ok(())
}

/// Main input loop.
fn run(game: &mut Game, input: impl BufRead, mut out: impl Write) -> Result<()> {
    computer_turn(game, &mut out)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                game.reset();
                computer_turn(game, &mut out)?;
            }
            Some(Command::Play(coord)) => match game.play_turn(coord) {
                Ok(report) => {
                    if let Some(reply) = report.computer {
                        writeln!(out, "Computer plays {}", reply.coord())?;
                    }
                    show(game, &mut out)?;
                }
                Err(
                    e @ (EngineError::IllegalMove { .. }
                    | EngineError::GameOver
                    | EngineError::WrongTurn { .. }),
                ) => {
                    warn!(error = %e, "Move rejected");
                    writeln!(out, "{e}")?;
                    show(game, &mut out)?;
                }
                Err(e @ EngineError::SearchBudgetExhausted { .. }) => {
                    search_aborted(&e, game, &mut out)?;
                }
                Err(e) => return Err(e.into()),
            },
            None => {
                writeln!(out, "Enter a move as `row col`, or `restart` / `quit`.")?;
                show(game, &mut out)?;
            }
        }
    }

    Ok(())
}
