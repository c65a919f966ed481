use crate::transform::Axis;

/// Reasons a [`Solver`](crate::Solver) may refuse to be built or to search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    /// A board side was zero, so no catalog can be built.
    #[error("invalid board dimension: {axis} count must be positive, got {value}")]
    #[allow(missing_docs)]
    InvalidDimension { axis: Axis, value: usize },

    /// The board handed to a search does not have the shape the solver was built for.
    /// Dimensions are `(width, height)`.
    #[error("board is {}x{} but the solver was built for {}x{}", found.0, found.1, expected.0, expected.1)]
    #[allow(missing_docs)]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Reasons a [`Board`](crate::Board) could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// No rows, or rows with no cells.
    #[error("board has no cells")]
    Empty,

    /// Row `row` has `found` cells where the first row had `expected`.
    #[allow(missing_docs)]
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A flat cell buffer did not hold `width * height` cells.
    #[allow(missing_docs)]
    #[error("expected {expected} cells, got {found}")]
    Length { expected: usize, found: usize },
}
