//! Strictly Minimax - Unified CLI
//!
//! Terminal tic-tac-toe plus a couple of commands for inspecting the engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_minimax::{Board, FirstPlayer, GameConfig, Mark, SearchEngine};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        config: None,
        first: None,
    }) {
        Command::Play { config, first } => run_play(config, first),
        Command::Solve { board, mark } => {
            initialize_tracing();
            run_solve(&board, mark)
        }
        Command::Selfplay { first } => {
            initialize_tracing();
            run_selfplay(first)
        }
    }
}

/// Run the terminal UI
fn run_play(config: Option<PathBuf>, first: Option<FirstPlayer>) -> Result<()> {
    let mut config = GameConfig::load(config.as_deref()).context("Failed to load game config")?;
    if let Some(first) = first {
        config = config.with_first_player(first);
    }
    strictly_minimax::run_tui(&config)
}

/// Print the engine's choice for a position
#[instrument(skip_all, fields(board = %board, %mark))]
fn run_solve(board: &str, mark: Mark) -> Result<()> {
    let mut board: Board = board.parse().context("Failed to parse board")?;
    let choice = SearchEngine::new()
        .analyze(&mut board, mark)
        .context("Failed to choose a move")?;

    println!("{}\n", board);
    println!(
        "{} plays {} ({}), score {}, {} positions searched",
        mark,
        choice.mv(),
        choice.mv().label(),
        choice.score(),
        choice.nodes()
    );
    Ok(())
}

/// Play the engine against itself from an empty board
#[instrument(skip_all, fields(%first))]
fn run_selfplay(first: FirstPlayer) -> Result<()> {
    let first = first.resolve(&mut rand::rng());
    info!(%first, "Starting self-play");

    let mut engine = SearchEngine::new();
    let mut board = Board::new();
    let choices = engine
        .self_play(&mut board, first)
        .context("Self-play failed")?;

    let mut replay = Board::new();
    let mut mark = first;
    for choice in &choices {
        replay
            .place(*choice.mv(), mark)
            .context("Failed to replay self-play")?;
        println!("{} -> {} (score {})\n{}\n", mark, choice.mv(), choice.score(), replay);
        mark = mark.opponent();
    }

    println!("Result: {}", board.outcome());
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_minimax=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
