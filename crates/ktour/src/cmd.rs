//! Command handlers for the `ktour` CLI.
//!
//! Handlers take 0-indexed squares and return the text to print; turning
//! 1-indexed user input into squares happens in `main`.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use knightstour::{Engine, Outcome, Rotation, Square, Tour, TourKind, feasibility};
use log::info;

use crate::grid;

/// Parameters for the `open` and `closed` subcommands.
#[derive(Clone, Copy, Debug)]
pub struct SolveOptions<'a> {
    /// Board width.
    pub width: u32,
    /// Board height.
    pub height: u32,
    /// Open or closed tour.
    pub kind: TourKind,
    /// Starting square (0-indexed).
    pub start: Square,
    /// Candidate enumeration order.
    pub rotation: Rotation,
    /// Engine override; the library picks one from the area when `None`.
    pub engine: Option<Engine>,
    /// Where to write the grid instead of stdout.
    pub output: Option<&'a Path>,
}

/// Refuse a start square outside the board, naming it the way the user
/// typed it.
fn ensure_on_board(width: u32, height: u32, start: Square) -> Result<()> {
    let on_board = (0..width as i64).contains(&i64::from(start.x))
        && (0..height as i64).contains(&i64::from(start.y));
    if !on_board {
        bail!(
            "start {},{} is outside the {width}x{height} board (columns 1..={width}, rows 1..={height})",
            i64::from(start.x) + 1,
            i64::from(start.y) + 1
        );
    }
    Ok(())
}

/// Solve a tour and report the node count and grid.
///
/// Fails when a feasibility gate rejects the instance or the search is
/// exhausted, with a message saying which.
pub fn solve(opts: SolveOptions<'_>) -> Result<String> {
    let SolveOptions {
        width,
        height,
        kind,
        start,
        rotation,
        engine,
        output,
    } = opts;
    ensure_on_board(width, height, start)?;

    let mut tour = Tour::new(width, height)?.with_rotation(rotation);
    if let Some(engine) = engine {
        tour = tour.with_engine(engine);
    }

    match tour.run(kind, start)? {
        Outcome::Solved => {}
        Outcome::Infeasible(obstruction) => {
            bail!("no {kind} tour exists on a {width}x{height} board: {obstruction}")
        }
        Outcome::Exhausted => bail!(
            "search exhausted after {} nodes without finding a {kind} tour",
            tour.stats().nodes
        ),
    }

    let grid = grid::render_tour(&tour);
    let mut report = format!(
        "A solution has been found!\nNodes explored: {}\n",
        tour.stats().nodes
    );
    match output {
        Some(path) => {
            fs::write(path, &grid)
                .with_context(|| format!("failed to write grid to {}", path.display()))?;
            info!("wrote {} rows to {}", height, path.display());
            report.push_str(&format!("Grid saved to {}\n", path.display()));
        }
        None => report.push_str(&grid),
    }
    Ok(report)
}

/// Run only the feasibility gate for a tour of `kind` from `start`.
///
/// Succeeds when no obstruction applies; a search is still needed to know
/// whether a tour exists.
pub fn check(width: u32, height: u32, start: Square, kind: TourKind) -> Result<String> {
    ensure_on_board(width, height, start)?;
    let obstruction = match kind {
        TourKind::Open => feasibility::open_tour(width, height, start),
        TourKind::Closed => feasibility::closed_tour(width, height),
    };
    if let Some(obstruction) = obstruction {
        bail!("no {kind} tour exists on a {width}x{height} board: {obstruction}");
    }
    Ok(format!(
        "No obstruction to a {kind} tour on a {width}x{height} board; a search is required.\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(width: u32, height: u32, kind: TourKind, start: Square) -> SolveOptions<'static> {
        SolveOptions {
            width,
            height,
            kind,
            start,
            rotation: Rotation::CANONICAL,
            engine: None,
            output: None,
        }
    }

    #[test]
    fn solve_reports_grid() {
        let report = solve(options(5, 5, TourKind::Open, Square::new(0, 0))).expect("solved");
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("A solution has been found!"));
        assert!(lines.next().is_some_and(|l| l.starts_with("Nodes explored: ")));
        assert_eq!(lines.count(), 5);
    }

    #[test]
    fn solve_explains_failures() {
        let err = solve(options(3, 3, TourKind::Closed, Square::new(0, 0)))
            .expect_err("odd board");
        assert!(err.to_string().contains("no closed tour exists"));

        let err = solve(options(4, 4, TourKind::Open, Square::new(0, 0)))
            .expect_err("no open tour on 4x4");
        assert!(err.to_string().contains("exhausted"));
    }

    #[test]
    fn start_is_checked_in_user_coordinates() {
        let err = solve(options(5, 5, TourKind::Open, Square::new(5, 0)))
            .expect_err("off board");
        assert!(err.to_string().starts_with("start 6,1 is outside"));
        assert!(check(5, 5, Square::new(0, -1), TourKind::Open).is_err());
    }

    #[test]
    fn check_only_consults_gates() {
        assert!(check(8, 8, Square::new(0, 0), TourKind::Closed).is_ok());
        // No open tour exists on 4x4, but no gate proves it.
        assert!(check(4, 4, Square::new(0, 0), TourKind::Open).is_ok());
        assert!(check(3, 8, Square::new(0, 0), TourKind::Closed).is_err());
        assert!(check(5, 5, Square::new(1, 0), TourKind::Open).is_err());
    }
}
