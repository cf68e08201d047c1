//! Command‑line entry point for the `ktour` tool.
//!
//! Finds open and closed knight's tours and prints the visit order as a
//! grid, or checks whether a board is ruled out before searching.

use std::{fmt::Display, path::PathBuf, process, str::FromStr};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use knightstour::{Engine, Rotation, Square, TourKind};
use log::LevelFilter;

/// CLI command implementations.
mod cmd;
/// Text grid rendering.
mod grid;

/// A square given on the command line as 1-indexed `X,Y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StartSquare {
    /// Column, counting from 1.
    x: u32,
    /// Row, counting from 1.
    y: u32,
}

impl StartSquare {
    /// The 0-indexed square used by the library.
    fn to_square(self) -> Square {
        // Both values are in 1..=i32::MAX after parsing.
        Square::new(self.x as i32 - 1, self.y as i32 - 1)
    }
}

impl FromStr for StartSquare {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (x, y) = value
            .split_once(',')
            .ok_or_else(|| "start must be in X,Y form".to_string())?;

        let parse_coord = |label: &str, coord: &str| -> Result<u32, String> {
            coord
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|&v| (1..=i32::MAX as u32).contains(&v))
                .ok_or_else(|| format!("invalid {label} '{coord}': expected an integer from 1"))
        };

        Ok(Self {
            x: parse_coord("column", x)?,
            y: parse_coord("row", y)?,
        })
    }
}

/// Search engine selection.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum EngineChoice {
    /// Recursive for small boards, explicit stack for large ones.
    #[default]
    Auto,
    /// Always recurse.
    Recursive,
    /// Always use the explicit stack.
    Stack,
}

impl EngineChoice {
    /// The engine override passed to the library.
    fn engine(self) -> Option<Engine> {
        match self {
            Self::Auto => None,
            Self::Recursive => Some(Engine::Recursive),
            Self::Stack => Some(Engine::Stack),
        }
    }
}

#[derive(Parser)]
#[command(name = "ktour")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, global = true, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Board size, shared by every subcommand.
#[derive(Args, Debug)]
struct BoardArgs {
    #[arg(value_parser = clap::value_parser!(u32).range(1..), help = "Number of columns")]
    /// Number of columns.
    width: u32,

    #[arg(value_parser = clap::value_parser!(u32).range(1..), help = "Number of rows")]
    /// Number of rows.
    height: u32,

    #[arg(
        short = 's',
        long = "start",
        value_name = "X,Y",
        default_value = "1,1",
        help = "Starting square, 1-indexed column and row"
    )]
    /// Starting square (1-indexed).
    start: StartSquare,
}

/// Options for the `open` and `closed` subcommands.
#[derive(Args, Debug)]
struct SolveArgs {
    /// Board size and start.
    #[command(flatten)]
    board: BoardArgs,

    #[arg(
        short = 'r',
        long = "rotation",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..16),
        help = "Rotate the knight move enumeration order (0-15)"
    )]
    /// Candidate enumeration rotation.
    rotation: u8,

    #[arg(
        short = 'e',
        long = "engine",
        value_enum,
        default_value = "auto",
        help = "Search engine"
    )]
    /// Engine selection.
    engine: EngineChoice,

    #[arg(
        short = 'o',
        long = "output",
        help = "Write the grid to this file instead of stdout"
    )]
    /// Optional grid output path.
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
/// Subcommands supported by the `ktour` tool.
enum Commands {
    #[command(about = "Find an open tour")]
    /// Find a tour that may end anywhere.
    Open(SolveArgs),

    #[command(about = "Find a closed tour")]
    /// Find a tour that ends a knight move away from its start.
    Closed(SolveArgs),

    #[command(about = "Check whether a tour is ruled out without searching")]
    /// Run the feasibility gates only.
    Check {
        /// Board size and start.
        #[command(flatten)]
        board: BoardArgs,

        #[arg(long = "closed", help = "Check for a closed tour instead of an open one")]
        /// Check the closed-tour gate.
        closed: bool,
    },
}

/// Print a handler's report or exit with an error.
fn report_ok<E: Display>(result: Result<String, E>) {
    match result {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Install the logger at the level selected by `-v`; `RUST_LOG` overrides.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Handle the `open` and `closed` subcommands.
fn handle_solve(kind: TourKind, args: &SolveArgs) -> Result<String> {
    let BoardArgs {
        width,
        height,
        start,
    } = args.board;
    cmd::solve(cmd::SolveOptions {
        width,
        height,
        kind,
        start: start.to_square(),
        rotation: Rotation::new(args.rotation),
        engine: args.engine.engine(),
        output: args.output.as_deref(),
    })
}

/// Handle the `check` subcommand.
fn handle_check(board: &BoardArgs, closed: bool) -> Result<String> {
    let kind = if closed {
        TourKind::Closed
    } else {
        TourKind::Open
    };
    cmd::check(board.width, board.height, board.start.to_square(), kind)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Open(args) => report_ok(handle_solve(TourKind::Open, &args)),
        Commands::Closed(args) => report_ok(handle_solve(TourKind::Closed, &args)),
        Commands::Check { board, closed } => report_ok(handle_check(&board, closed)),
    }
}
