//! Knight's tour search on rectangular boards.
//!
//! Finds a sequence of knight moves that visits every square exactly once,
//! optionally returning to the start. The search is a depth-first
//! backtracking walk ordered by Warnsdorff's rule, guarded by closed-form
//! feasibility checks that reject provably impossible instances up front.
//!
//! # Layout
//!
//! - [`board`]: visited-square grid
//! - [`moves`]: knight offsets and enumeration order
//! - [`rank`]: Warnsdorff candidate ordering
//! - [`search`]: the backtracking engines
//! - [`feasibility`]: parity and Schwenk gates
//! - [`tour`]: the [`Tour`] entry point

/// Visited-square occupancy grid.
pub mod board;
/// Error types used across the crate.
pub mod error;
/// Closed-form checks that rule out impossible instances.
pub mod feasibility;
/// Knight move generation.
pub mod moves;
/// Warnsdorff ranking of candidate moves.
pub mod rank;
/// Backtracking search engines.
pub mod search;
/// Board coordinates.
pub mod square;
/// Per-square visit order.
pub mod steps;
/// Configuring boards and running tours.
pub mod tour;

pub use crate::{
    moves::Rotation,
    search::Engine,
    square::Square,
    tour::{Outcome, Tour, TourKind},
};

/// Find a tour of a `width`×`height` board starting at `start`.
///
/// Returns the squares in visit order, or `None` when no tour exists or the
/// search found none. Errors only on invalid dimensions or an off-board
/// start.
pub fn find_tour(
    width: u32,
    height: u32,
    start: Square,
    kind: TourKind,
) -> error::Result<Option<Vec<Square>>> {
    let mut tour = Tour::new(width, height)?;
    Ok(match tour.run(kind, start)? {
        Outcome::Solved => tour.path(),
        Outcome::Infeasible(_) | Outcome::Exhausted => None,
    })
}
