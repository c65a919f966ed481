use std::fmt::{Display, Formatter};
use std::num::NonZero;

use serde::{Deserialize, Serialize};

pub(crate) type Coord = usize;
/// A board side length; boards are never empty.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Serialize, Deserialize)]
/// A location `(x, y)` on a board. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The `(row, col)` index of this location in an [`ndarray::Array2`].
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Row-major offset into a flat buffer of a board `width` cells wide.
    pub(crate) fn flat(&self, width: Coord) -> usize {
        self.1 * width + self.0
    }

    /// Step one cell right, wrapping around the row only when `wrap` is set.
    pub(crate) fn right_in(self, width: Coord, wrap: bool) -> Option<Self> {
        match self.0 + 1 {
            x if x < width => Some(Self(x, self.1)),
            _ if wrap => Some(Self(0, self.1)),
            _ => None,
        }
    }

    /// Step one cell down, wrapping around the column only when `wrap` is set.
    pub(crate) fn down_in(self, height: Coord, wrap: bool) -> Option<Self> {
        match self.1 + 1 {
            y if y < height => Some(Self(self.0, y)),
            _ if wrap => Some(Self(self.0, 0)),
            _ => None,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// `(a + delta) mod modulus`.
#[inline]
pub(crate) fn wrapping_add(a: Coord, delta: Coord, modulus: Coord) -> Coord {
    (a + delta % modulus) % modulus
}

/// `(a - delta) mod modulus`, kept non-negative.
#[inline]
pub(crate) fn wrapping_sub(a: Coord, delta: Coord, modulus: Coord) -> Coord {
    (a + modulus - delta % modulus) % modulus
}
