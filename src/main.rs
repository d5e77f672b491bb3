use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use connect_four::config::{AppConfig, BoardSize};
use connect_four::game::{Engine, GameStatus};

/// Replay a sequence of Connect Four moves and print the resulting board.
#[derive(Parser)]
#[command(name = "connect-four", about = "Replay Connect Four moves")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Board size preset: 8x5, 10x6 or 12x7 (columns x rows)
    #[arg(long)]
    size: Option<BoardSize>,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Zero-based columns to drop into, alternating players starting with Red
    #[arg(allow_negative_numbers = true)]
    moves: Vec<i64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        app_config.board = size.config();
    }
    if let Some(rows) = cli.rows {
        app_config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        app_config.board.columns = columns;
    }
    app_config.validate().context("invalid board size")?;

    let mut engine = Engine::from_config(&app_config.board);
    for (turn, &column) in cli.moves.iter().enumerate() {
        if let Err(err) = engine.apply_move(column) {
            warn!(turn = turn + 1, column, %err, "skipping move");
        }
    }

    println!("{}", engine.board());
    match engine.status() {
        GameStatus::Won { winner, line } => {
            let cells: Vec<String> = line
                .cells()
                .iter()
                .map(|c| format!("({}, {})", c.row, c.col))
                .collect();
            println!("{winner} wins: {}", cells.join(" "));
        }
        GameStatus::Draw => println!("Draw"),
        GameStatus::InProgress => {
            println!("In progress, {} to move", engine.current_player());
        }
    }

    Ok(())
}
