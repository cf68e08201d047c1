//! Knight move generation.

use std::fmt;

use crate::square::Square;

/// Canonical knight offsets `(dx, dy)`, indexed 0..8.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Starting point for enumerating [`KNIGHT_OFFSETS`].
///
/// A rotation `r` enumerates offset `(i + r) mod 8` in position `i`.
/// Values of 8 and above additionally shift the cycle by four, starting
/// from the opposite side. Rotation only reorders the eight destinations;
/// it never changes which squares are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rotation(u8);

impl Rotation {
    /// The unrotated enumeration order.
    pub const CANONICAL: Self = Self(0);

    /// Create a rotation from its raw value.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The raw rotation value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Offset table index enumerated at position `i`.
    #[inline]
    pub fn offset_index(self, i: usize) -> usize {
        let base = (i + usize::from(self.0)) % 8;
        if self.0 >= 8 { (base + 4) % 8 } else { base }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The eight knight destinations from `from` in `rotation` order.
///
/// Destinations are not filtered; some may lie off the board.
#[inline]
pub fn destinations(from: Square, rotation: Rotation) -> [Square; 8] {
    std::array::from_fn(|i| {
        let (dx, dy) = KNIGHT_OFFSETS[rotation.offset_index(i)];
        from.offset(dx, dy)
    })
}

/// Are `a` and `b` exactly one knight move apart?
pub fn is_knight_move(a: Square, b: Square) -> bool {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    matches!((dx, dy), (1, 2) | (2, 1))
}
