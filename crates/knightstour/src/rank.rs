//! Warnsdorff move ordering.
//!
//! Candidates are visited in ascending order of their onward degree (the
//! number of unvisited squares a knight could continue to), so the most
//! constrained squares are used up before they can strand the search.
//! Ties go to the square closer to the board centre.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::{
    board::Board,
    moves::{self, Rotation},
    square::Square,
};

/// A possible next square together with its ranking key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// The destination square.
    pub square: Square,
    /// Unvisited on-board knight destinations from `square`.
    pub onward: u8,
    /// Euclidean distance from `square` to the board centre.
    pub distance: f64,
}

impl Candidate {
    /// Score `square` against the current board.
    pub fn new(board: &Board, square: Square) -> Self {
        let (cx, cy) = board.center();
        Self {
            square,
            onward: onward_count(board, square),
            distance: square.distance_to(cx, cy),
        }
    }

    /// Heuristic order: fewer onward moves first, then nearer the centre.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.onward
            .cmp(&other.onward)
            .then_with(|| self.distance.total_cmp(&other.distance))
    }
}

/// Number of unvisited, on-board knight destinations from `square`.
pub fn onward_count(board: &Board, square: Square) -> u8 {
    moves::destinations(square, Rotation::CANONICAL)
        .into_iter()
        .filter(|&d| !board.is_visited(d))
        .count() as u8
}

/// Stable sort of `candidates` by [`Candidate::rank_cmp`].
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(Candidate::rank_cmp);
}

/// The unvisited destinations of `from`, enumerated in `rotation` order and
/// then ranked.
pub fn ranked_candidates(
    board: &Board,
    from: Square,
    rotation: Rotation,
) -> SmallVec<[Candidate; 8]> {
    let mut candidates: SmallVec<[Candidate; 8]> = moves::destinations(from, rotation)
        .into_iter()
        .filter(|&d| !board.is_visited(d))
        .map(|d| Candidate::new(board, d))
        .collect();
    rank(&mut candidates);
    candidates
}
