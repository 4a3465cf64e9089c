//! Tic-tac-toe minimax engine - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_minimax::{
    Analysis, Board, CandidateVerdict, EngineConfig, OutputFormat, Playout, PlySource, analyze,
    play_out,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(&cli.config)?.with_json(cli.json);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Analyze { board, explain } => run_analyze(&board, &config.with_explain(explain)),
        Command::PlayOut { board } => run_play_out(board.as_deref(), &config),
    }
}

fn parse_board(notation: &str) -> Result<Board> {
    notation
        .parse()
        .with_context(|| format!("Could not parse board {:?}", notation))
}

/// Analyse one position and print the verdict.
#[instrument(skip(config))]
fn run_analyze(notation: &str, config: &EngineConfig) -> Result<()> {
    let board = parse_board(notation)?;
    let outcome = board.outcome();
    info!(%outcome, player = %board.active_player(), "Analysing position");

    if outcome.is_terminal() {
        match config.output() {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({
                    "board": board,
                    "outcome": outcome,
                    "utility": board.utility(),
                })
            ),
            OutputFormat::Text => {
                println!("{}\n", board);
                println!("Outcome: {}", outcome);
                println!("Utility: {}", board.utility());
            }
        }
        return Ok(());
    }

    let analysis = analyze(&board)?;
    match config.output() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => print_analysis(&analysis, *config.explain()),
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis, explain: bool) {
    let board = analysis.board();
    println!("{}\n", board);
    println!("To move: {}", analysis.player());
    println!("Outcome: {}", board.outcome());
    match analysis.best_move() {
        Some(mv) => println!("Best move: {}", mv),
        None => println!("Best move: none (every move gives the opponent a win)"),
    }
    if explain {
        println!("\nCandidates:");
        for candidate in analysis.candidates() {
            let verdict = match candidate.verdict() {
                CandidateVerdict::ImmediateWin => "wins immediately".to_string(),
                CandidateVerdict::ImmediateLoss => "loses immediately".to_string(),
                CandidateVerdict::OpponentReplyWins { score } => {
                    format!("score {:+}, opponent wins next (disqualified)", score)
                }
                CandidateVerdict::Scored { score } => format!("score {:+}", score),
            };
            println!("  {}  {}", candidate.mv(), verdict);
        }
        println!("\nNodes searched: {}", analysis.nodes());
    }
}

/// Play the position out with the engine on both sides.
#[instrument(skip(config))]
fn run_play_out(notation: Option<&str>, config: &EngineConfig) -> Result<()> {
    let board = match notation {
        Some(notation) => parse_board(notation)?,
        None => Board::initial(),
    };
    let playout = play_out(&board)?;
    match config.output() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&playout)?),
        OutputFormat::Text => print_playout(&playout),
    }
    Ok(())
}

fn print_playout(playout: &Playout) {
    println!("{}\n", playout.start());
    for (i, ply) in playout.plies().iter().enumerate() {
        let note = match ply.source() {
            PlySource::Searched => "",
            PlySource::Fallback => " (no optimal move, first legal move played)",
        };
        println!("{}. {} plays {}{}", i + 1, ply.player(), ply.mv(), note);
        println!("{}\n", ply.board());
    }
    println!("Result: {}", playout.outcome());
}
