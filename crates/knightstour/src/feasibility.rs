//! Closed-form feasibility gates, evaluated before any search.

use std::fmt;

use crate::square::Square;

/// Why a tour provably cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Obstruction {
    /// Odd×odd board with a start on the minority colour: a knight alternates
    /// colours, so an open tour must start and end on the majority colour.
    ColorParity,
    /// Odd×odd board: a closed tour needs an even number of squares.
    OddArea,
    /// A side of 1, 2 or 4 rules out a closed tour.
    NarrowSide(u32),
    /// A 3×6 or 3×8 board has no closed tour (3×4 is already narrow); holds
    /// the longer side.
    ThreeRank(u32),
}

impl fmt::Display for Obstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorParity => write!(
                f,
                "on an odd-by-odd board an open tour cannot start on a square whose coordinates sum to an odd number"
            ),
            Self::OddArea => write!(f, "a closed tour needs an even number of squares"),
            Self::NarrowSide(n) => {
                write!(f, "a board with a side of {n} has no closed tour")
            }
            Self::ThreeRank(n) => write!(f, "a 3x{n} board has no closed tour"),
        }
    }
}

/// Both sides odd?
fn odd_by_odd(width: u32, height: u32) -> bool {
    width % 2 == 1 && height % 2 == 1
}

/// Gate for open tours starting at `start`.
pub fn open_tour(width: u32, height: u32, start: Square) -> Option<Obstruction> {
    let odd_start = (start.x + start.y).rem_euclid(2) == 1;
    (odd_by_odd(width, height) && odd_start).then_some(Obstruction::ColorParity)
}

/// Gate for closed tours, per Schwenk's theorem.
pub fn closed_tour(width: u32, height: u32) -> Option<Obstruction> {
    if odd_by_odd(width, height) {
        return Some(Obstruction::OddArea);
    }
    if let Some(side) = [width, height].into_iter().find(|&s| matches!(s, 1 | 2 | 4)) {
        return Some(Obstruction::NarrowSide(side));
    }
    match (width, height) {
        (3, long @ (6 | 8)) | (long @ (6 | 8), 3) => Some(Obstruction::ThreeRank(long)),
        _ => None,
    }
}
