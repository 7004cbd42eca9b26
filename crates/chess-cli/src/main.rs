//! tilechess - inspect positions, apply moves, and consult a UCI engine.
//!
//! Output meant for other programs (FEN strings, move lists) goes to stdout;
//! logs go to stderr.

mod bridge;
mod config;
mod report;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use chess_board::Board;
use chess_core::Square;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bridge::UciEngine;
use config::Config;

/// Tile-board chess tool.
#[derive(Parser)]
#[command(name = "tilechess")]
#[command(about = "Inspect chess positions, list and apply moves, consult a UCI engine")]
struct Args {
    /// Path to a TOML config file (default: ./tilechess.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the board diagram and its FEN
    Show {
        /// Position to load (default: config start_fen)
        #[arg(long)]
        fen: Option<String>,
    },
    /// List generated moves
    Moves {
        #[arg(long)]
        fen: Option<String>,
        /// Only the piece on this square (e.g., e2); default: the side to move
        #[arg(long)]
        square: Option<String>,
        /// Print JSON instead of one move per line
        #[arg(long)]
        json: bool,
    },
    /// Apply coordinate moves (e.g., e2e4) in order and print the resulting FEN
    Apply {
        #[arg(long)]
        fen: Option<String>,
        /// Moves to apply
        moves: Vec<String>,
    },
    /// Ask a UCI engine for a move, apply it, and print the resulting FEN
    Engine {
        #[arg(long)]
        fen: Option<String>,
        /// Engine executable (default: config engine.path)
        #[arg(long)]
        engine: Option<PathBuf>,
        /// Parameters for `go` (default: config engine.time_control)
        #[arg(long)]
        go: Option<String>,
    },
}

fn init_tracing(verbose: bool, config_level: &str) {
    let fallback = if verbose { "debug" } else { config_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_board(fen: Option<&str>, config: &Config) -> anyhow::Result<Board> {
    let fen = fen.unwrap_or(config.start_fen.as_str());
    Board::from_fen(fen).with_context(|| format!("Failed to load position '{}'", fen))
}

fn parse_square(text: &str) -> anyhow::Result<Square> {
    Square::from_algebraic(text).with_context(|| format!("'{}' is not a square", text))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (config, source) = Config::load(args.config.as_deref())?;
    init_tracing(args.verbose, &config.log_level);

    match &source {
        Some(path) => tracing::debug!("Loaded config from {:?}", path),
        None => tracing::debug!("No config file found, using defaults"),
    }

    match args.command {
        Command::Show { fen } => {
            let board = load_board(fen.as_deref(), &config)?;
            println!("{}", board);
            println!();
            println!("{}", board.current_fen());
        }
        Command::Moves { fen, square, json } => {
            let board = load_board(fen.as_deref(), &config)?;
            let moves = match square {
                Some(text) => board.legal_moves(parse_square(&text)?),
                None => board.all_moves(board.side_to_move()),
            };
            tracing::info!("{} moves generated", moves.len());
            if json {
                println!("{}", report::to_json(&moves)?);
            } else if !moves.is_empty() {
                println!("{}", report::to_lines(&moves));
            }
        }
        Command::Apply { fen, moves } => {
            let mut board = load_board(fen.as_deref(), &config)?;
            for text in &moves {
                let m = board
                    .apply_uci(text)
                    .with_context(|| format!("Failed to apply {}", text))?;
                tracing::info!("Applied {:?}", m);
            }
            println!("{}", board.current_fen());
        }
        Command::Engine { fen, engine, go } => {
            let mut board = load_board(fen.as_deref(), &config)?;
            let Some(path) = engine.or_else(|| config.engine.path.clone()) else {
                bail!("No engine configured: pass --engine or set engine.path");
            };
            let go = go.unwrap_or_else(|| config.engine.time_control.clone());
            let timeout = Duration::from_millis(config.engine.timeout_ms);

            tracing::info!("Starting engine {:?}", path);
            let mut client = UciEngine::spawn(&path, &config.engine.args, timeout)
                .with_context(|| format!("Failed to start engine {:?}", path))?;
            client.init().context("Engine handshake failed")?;

            let reply = client
                .best_move(&board.current_fen(), &go)
                .context("Engine did not produce a move")?;
            client.quit()?;

            match reply {
                Some(text) => {
                    tracing::info!("{} suggests {}", client.name, text);
                    if let Err(e) = board.apply_uci(&text) {
                        tracing::warn!("Rejected engine move {}: {}", text, e);
                        return Err(e).context(format!("Engine move {} cannot be applied", text));
                    }
                    println!("{}", board.current_fen());
                }
                None => {
                    tracing::info!("{} reports no move", client.name);
                    println!("{}", board.current_fen());
                }
            }
        }
    }

    Ok(())
}
