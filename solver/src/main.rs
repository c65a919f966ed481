use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use rotomatch::{Board, Drag, Grouping, ScoredMove, Solver, SolverError, Tile, Transform};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{SolverConfig, Strategy};

mod config;

/// Find the rotation that lines up the most same-colored tiles.
#[derive(Parser, Debug)]
#[command(name = "solver", about = "Suggest a row or column rotation for classified boards", long_about = None)]
struct Cli {
    /// Board file: one line per row, one character per cell, `.` or `?` for unclassified cells.
    /// Several boards of the same shape may be separated by blank lines. Reads stdin when absent.
    board: Option<PathBuf>,

    /// Override the minimum group size and move score
    #[arg(long, allow_negative_numbers = true)]
    min_score: Option<isize>,

    /// Override the search strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Override how groups are formed: reference or union-find
    #[arg(long)]
    grouping: Option<Grouping>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "rotomatch.toml")]
    config: PathBuf,

    /// Print one JSON object per board instead of text
    #[arg(long)]
    json: bool,

    /// Also print each board as it would look after the move
    #[arg(long)]
    show: bool,

    /// More log output; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    board: usize,
    transform: Option<&'a Transform>,
    score: Option<usize>,
    drag: Option<Drag>,
}

impl<'a> Report<'a> {
    fn new(board: usize, found: Option<ScoredMove<'a>>) -> Self {
        Self {
            board,
            transform: found.map(|found| found.transform),
            score: found.map(|found| found.score),
            drag: found.and_then(|found| found.transform.drag()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = SolverConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(min_score) = cli.min_score {
        config.min_score = min_score;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(grouping) = cli.grouping {
        config.grouping = grouping;
    }

    let text = match &cli.board {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("reading stdin")?;
            text
        }
    };

    let boards = Board::parse_all(&text).context("parsing boards")?;
    let Some(first) = boards.first() else {
        bail!("no boards in input");
    };

    let (width, height) = config.board_dims().unwrap_or(first.dims());
    let solver = Solver::with_grouping(width, height, config.grouping)?;
    info!(width, height, grouping = %config.grouping, strategy = ?config.strategy, min_score = config.min_score, "solver ready");

    for (index, board) in boards.iter().enumerate() {
        let found = search(&solver, board, &config).with_context(|| format!("solving board {index}"))?;
        print!("{}", render_report(index, board, found, cli.json, cli.show)?);
    }

    Ok(())
}

fn search<'a>(solver: &'a Solver, board: &'a Board<Tile<char>>, config: &SolverConfig) -> Result<Option<ScoredMove<'a>>, SolverError> {
    match config.strategy {
        Strategy::Best => solver.find_best_move(board, config.min_score),
        Strategy::First => solver.find_first_move(board, config.min_score),
    }
}

/// The lines printed for one board, newline terminated.
fn render_report(index: usize, board: &Board<Tile<char>>, found: Option<ScoredMove>, json: bool, show: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string(&Report::new(index, found))?));
    }

    let Some(found) = found else {
        return Ok(format!("board {index}: no move\n"));
    };

    let mut out = match found.transform.drag() {
        Some(drag) => format!("board {index}: {} (score {}), drag {drag}\n", found.transform, found.score),
        None => format!("board {index}: {} (score {})\n", found.transform, found.score),
    };
    if show {
        out.push_str(&board.apply(found.transform)?.to_string());
    }

    Ok(out)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
