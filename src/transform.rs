//! Candidate moves and how they are performed.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantArray};

use crate::location::{Dimension, Location};

/// The two families of moves: rotating one column, or rotating one row.
///
/// [`VARIANTS`](VariantArray::VARIANTS) lists columns first; catalogs are enumerated in that order.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, strum::Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Cells slide down a column, the bottom cell wrapping to the top.
    Column,
    /// Cells slide along a row to the right, the last cell wrapping to the front.
    Row,
}

impl Axis {
    /// `(number of lines, length of each line)` along this axis for a board of `dims`.
    pub fn lines(&self, dims: (Dimension, Dimension)) -> (usize, usize) {
        let (w, h) = (dims.0.get(), dims.1.get());
        match self {
            Self::Column => (w, h),
            Self::Row => (h, w),
        }
    }
}

/// A candidate move: each column `x` is cyclically shifted down by `col_shift[x]`, each row `y` right by `row_shift[y]`.
///
/// Transforms produced by a [`Solver`](crate::Solver) always rotate exactly one line, see [`Self::is_single_rotation`].
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Transform {
    pub(crate) col_shift: Vec<usize>,
    pub(crate) row_shift: Vec<usize>,
}

/// The on-screen gesture performing a [`Transform`]: press on `from`, release on `to`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Drag {
    /// Where the drag starts.
    pub from: Location,
    /// Where the drag is released.
    pub to: Location,
}

impl Transform {
    /// The transform that moves nothing. Its graph is the plain grid.
    pub fn identity(dims: (Dimension, Dimension)) -> Self {
        Self {
            col_shift: vec![0; dims.0.get()],
            row_shift: vec![0; dims.1.get()],
        }
    }

    /// Rotate line `index` of `axis` by `amount`.
    ///
    /// # Panics
    /// If `index` is not a line of a board with `dims`.
    pub fn rotate(dims: (Dimension, Dimension), axis: Axis, index: usize, amount: usize) -> Self {
        let mut transform = Self::identity(dims);
        match axis {
            Axis::Column => transform.col_shift[index] = amount,
            Axis::Row => transform.row_shift[index] = amount,
        }
        transform
    }

    /// Downward shift of every column.
    pub fn col_shift(&self) -> &[usize] {
        &self.col_shift
    }

    /// Rightward shift of every row.
    pub fn row_shift(&self) -> &[usize] {
        &self.row_shift
    }

    /// `(width, height)` of the board this transform was made for.
    pub fn dims(&self) -> (usize, usize) {
        (self.col_shift.len(), self.row_shift.len())
    }

    /// The first rotated line as `(axis, index, amount)`, columns before rows.
    pub fn rotation(&self) -> Option<(Axis, usize, usize)> {
        Axis::VARIANTS.iter()
            .find_map(|axis| {
                let shifts = match axis {
                    Axis::Column => &self.col_shift,
                    Axis::Row => &self.row_shift,
                };
                shifts.iter()
                    .position(|shift| *shift != 0)
                    .map(|index| (*axis, index, shifts[index]))
            })
    }

    /// Whether exactly one line is rotated, by an amount less than its length.
    pub fn is_single_rotation(&self) -> bool {
        let (w, h) = self.dims();
        let nonzero_cols = self.col_shift.iter().filter(|shift| **shift != 0).count();
        let nonzero_rows = self.row_shift.iter().filter(|shift| **shift != 0).count();

        match self.rotation() {
            Some((Axis::Column, _, amount)) => nonzero_cols == 1 && nonzero_rows == 0 && amount < h,
            Some((Axis::Row, _, amount)) => nonzero_rows == 1 && nonzero_cols == 0 && amount < w,
            None => false,
        }
    }

    /// Where to drag to perform this transform by hand.
    ///
    /// A column `c` rotated by `r` is dragged from its top cell down to row `r`; a row `y` rotated by `r` from its leftmost cell right to column `r`.
    pub fn drag(&self) -> Option<Drag> {
        self.rotation().map(|(axis, index, amount)| match axis {
            Axis::Column => Drag { from: Location(index, 0), to: Location(index, amount) },
            Axis::Row => Drag { from: Location(0, index), to: Location(amount, index) },
        })
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.rotation() {
            Some((axis, index, amount)) => write!(f, "{} {} by {}", axis, index, amount),
            None => write!(f, "identity"),
        }
    }
}

impl Display for Drag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
