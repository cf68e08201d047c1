//! Visited-square occupancy grid.

use crate::{
    error::{Error, Result},
    square::Square,
};

/// A rectangular board that tracks which squares are on the current path.
///
/// Squares outside the board report as visited, so callers can probe any
/// knight destination without a separate bounds check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Number of columns.
    width: u32,
    /// Number of rows.
    height: u32,
    /// Row-major visited flags, `width * height` long.
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails when either side is zero or when the area does not fit in a
    /// `u32` step index.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let area = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; area as usize],
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of squares.
    pub fn area(&self) -> u32 {
        // Fits: checked at construction.
        self.cells.len() as u32
    }

    /// Geometric centre of the board in square coordinates.
    pub fn center(&self) -> (f64, f64) {
        (
            (f64::from(self.width) - 1.0) / 2.0,
            (f64::from(self.height) - 1.0) / 2.0,
        )
    }

    /// Is `square` inside the board?
    pub fn contains(&self, square: Square) -> bool {
        self.index(square).is_some()
    }

    /// Has `square` been visited? Off-board squares always count as visited.
    pub fn is_visited(&self, square: Square) -> bool {
        self.index(square).is_none_or(|idx| self.cells[idx])
    }

    /// Mark or clear a square.
    ///
    /// The square must be on the board.
    pub fn set_visited(&mut self, square: Square, visited: bool) {
        debug_assert!(
            self.contains(square),
            "set_visited called with off-board square {square}"
        );
        if let Some(idx) = self.index(square) {
            self.cells[idx] = visited;
        }
    }

    /// Clear every square.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of squares currently marked.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    /// Iterate over every square in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Square::new(x as i32, y as i32))
        })
    }

    /// Row-major cell index, or `None` when the square is off the board.
    pub(crate) fn index(&self, square: Square) -> Option<usize> {
        let x = u32::try_from(square.x).ok()?;
        let y = u32::try_from(square.y).ok()?;
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

/// Validate board dimensions and return the area.
pub(crate) fn checked_area(width: u32, height: u32) -> Result<u32> {
    let invalid = |reason| Error::Dimensions {
        width,
        height,
        reason,
    };
    if width == 0 || height == 0 {
        return Err(invalid("both sides must be at least 1"));
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(invalid("sides must fit a signed 32-bit coordinate"));
    }
    width
        .checked_mul(height)
        .ok_or_else(|| invalid("area must fit a 32-bit step index"))
}
