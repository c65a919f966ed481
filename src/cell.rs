use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Characters read as [`Tile::Unclassified`] when parsing boards from text.
pub const UNCLASSIFIED_CHARS: [char; 2] = ['.', '?'];

/// A classified cell: either a label from the color classifier or the sentinel for a cell it could not place.
///
/// Two [`Unclassified`](Tile::Unclassified) tiles compare equal and therefore match each other while scoring.
/// Callers who do not want that should substitute distinct labels before solving.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Tile<L> {
    /// A cell the classifier recognized.
    Label(L),
    /// A cell the classifier could not place.
    Unclassified,
}

impl<L> Default for Tile<L> {
    fn default() -> Self {
        Self::Unclassified
    }
}

impl From<char> for Tile<char> {
    fn from(value: char) -> Self {
        match UNCLASSIFIED_CHARS.contains(&value) {
            true => Self::Unclassified,
            false => Self::Label(value),
        }
    }
}

impl<L: Display> Display for Tile<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Label(label) => write!(f, "{}", label),
            Tile::Unclassified => write!(f, "{}", UNCLASSIFIED_CHARS[0]),
        }
    }
}
