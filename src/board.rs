use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;

use crate::cell::Tile;
use crate::error::{BoardError, SolverError};
use crate::location::{wrapping_sub, Location};
use crate::transform::Transform;

/// A snapshot of classified cells, `h` rows by `w` columns.
///
/// Cells may be anything comparable for equality; [`Tile`] is provided for classifier output.
/// Text boards (see [`FromStr`]) use one character per cell and one line per row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<C> {
    pub(crate) cells: Array2<C>,
}

impl<C> Board<C> {
    /// Assemble a board from rows of cells, top row first.
    ///
    /// Fails if there are no cells or if rows differ in length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
    {
        let mut flat = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, cells) in rows.into_iter().enumerate() {
            let before = flat.len();
            flat.extend(cells);
            let found = flat.len() - before;

            match width {
                None => width = Some(found),
                Some(expected) if expected != found => return Err(BoardError::Ragged { row, expected, found }),
                Some(_) => {}
            }
            height += 1;
        }

        Self::from_shape_vec((width.unwrap_or(0), height), flat)
    }

    /// Assemble a board of `(width, height)` from row-major `cells`.
    pub fn from_shape_vec(dims: (usize, usize), cells: Vec<C>) -> Result<Self, BoardError> {
        if dims.0 == 0 || dims.1 == 0 {
            return Err(BoardError::Empty);
        }

        let expected = dims.0 * dims.1;
        let found = cells.len();
        let cells = Array2::from_shape_vec((dims.1, dims.0), cells)
            .map_err(|_| BoardError::Length { expected, found })?;

        Ok(Self { cells })
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (usize, usize) {
        let (rows, cols) = self.cells.dim();
        (cols, rows)
    }

    /// The cell at `location`, if it is on the board.
    pub fn get(&self, location: Location) -> Option<&C> {
        self.cells.get(location.as_index())
    }

    /// The underlying grid, indexed `(row, col)`.
    pub fn cells(&self) -> &Array2<C> {
        &self.cells
    }
}

impl<C: Clone> Board<C> {
    /// Physically perform `transform`, returning the board as it would look afterwards.
    ///
    /// Columns are rotated before rows, which only matters for transforms no catalog contains.
    pub fn apply(&self, transform: &Transform) -> Result<Self, SolverError> {
        let (w, h) = self.dims();
        if transform.dims() != (w, h) {
            return Err(SolverError::ShapeMismatch { expected: transform.dims(), found: (w, h) });
        }

        Ok(Self {
            cells: Array2::from_shape_fn((h, w), |(row, col)| {
                let source_col = wrapping_sub(col, transform.row_shift[row], w);
                let source_row = wrapping_sub(row, transform.col_shift[source_col], h);
                self.cells[(source_row, source_col)].clone()
            }),
        })
    }
}

impl Board<Tile<char>> {
    /// Parse several text boards separated by blank lines.
    pub fn parse_all(text: &str) -> Result<Vec<Self>, BoardError> {
        let chunks = text.lines()
            .map(str::trim)
            .chunk_by(|line| line.is_empty());

        let boards: Result<Vec<Self>, BoardError> = chunks.into_iter()
            .filter(|(blank, _)| !blank)
            .map(|(_, lines)| Self::from_rows(lines.map(|line| line.chars().map(Tile::from))))
            .collect();
        boards
    }
}

impl FromStr for Board<Tile<char>> {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.trim().lines().map(|line| line.trim().chars().map(Tile::from)))
    }
}

impl<C> Index<Location> for Board<C> {
    type Output = C;

    fn index(&self, index: Location) -> &Self::Output {
        &self.cells[index.as_index()]
    }
}

impl<C: Display> Display for Board<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
