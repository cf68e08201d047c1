//! Error type shared by the board, step recorder and tour facade.

use thiserror::Error;

use crate::square::Square;

/// Errors produced while configuring a board or running a tour.
///
/// An instance that simply has no tour is not an error; it is reported as a
/// `false` result (or an [`crate::tour::Outcome`]) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The board has a zero side, or its area does not fit a step index.
    #[error("invalid board dimensions {width}x{height}: {reason}")]
    Dimensions {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
        /// Which constraint was violated.
        reason: &'static str,
    },
    /// A square passed across the public boundary lies outside the board.
    #[error("square {square} is outside the {width}x{height} board")]
    OffBoard {
        /// The offending square (0-indexed).
        square: Square,
        /// Board width.
        width: u32,
        /// Board height.
        height: u32,
    },
    /// A step index beyond the board's capacity was recorded.
    #[error("step {step} exceeds the board capacity of {area} squares")]
    StepOutOfRange {
        /// The step that was rejected.
        step: u32,
        /// Number of squares on the board.
        area: u32,
    },
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;
