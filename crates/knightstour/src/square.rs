//! Board coordinates.

use std::fmt;

/// A 0-indexed board coordinate.
///
/// Coordinates are signed so that applying a knight offset near an edge
/// yields a well-defined off-board square, which the board then treats as
/// already visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl Square {
    /// Create a square from its column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The square reached by moving `dx` columns and `dy` rows.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to a (possibly fractional) point such as the
    /// board centre.
    pub fn distance_to(self, cx: f64, cy: f64) -> f64 {
        let dx = cx - f64::from(self.x);
        let dy = cy - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Square {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
