use itertools::{iproduct, Itertools};
use serde::Serialize;
use strum::VariantArray;
use tracing::{debug, trace};

use crate::board::Board;
use crate::builder::AdjacencyBuilder;
use crate::error::SolverError;
use crate::graph::TransformGraph;
use crate::location::Dimension;
use crate::score::{group_score, Grouping};
use crate::transform::{Axis, Transform};

/// A catalog entry together with the score it achieved on some board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoredMove<'a> {
    /// The move, borrowed from the solver's catalog.
    pub transform: &'a Transform,
    /// Total size of the groups that counted.
    pub score: usize,
}

/// Move search over boards of one fixed shape.
///
/// Construction enumerates every single-line rotation and derives its [`TransformGraph`] once.
/// Searches then only compare colors along precomputed edges, so one solver should be kept for as long as the board shape holds.
///
/// The catalog lists every column rotation (by column, then by ascending shift) followed by every row rotation in the same fashion.
/// That order is the search order and breaks ties.
#[derive(Clone, Debug)]
pub struct Solver {
    dims: (Dimension, Dimension),
    grouping: Grouping,
    catalog: Vec<TransformGraph>,
}

impl Solver {
    /// A solver for boards `width` columns by `height` rows, scoring with [`Grouping::Reference`].
    pub fn new(width: usize, height: usize) -> Result<Self, SolverError> {
        Self::with_grouping(width, height, Grouping::default())
    }

    /// A solver for boards `width` columns by `height` rows, scoring with `grouping`.
    ///
    /// Fails with [`SolverError::InvalidDimension`] if either side is zero.
    pub fn with_grouping(width: usize, height: usize, grouping: Grouping) -> Result<Self, SolverError> {
        let dims = (
            Dimension::new(width).ok_or(SolverError::InvalidDimension { axis: Axis::Column, value: width })?,
            Dimension::new(height).ok_or(SolverError::InvalidDimension { axis: Axis::Row, value: height })?,
        );

        let builder = AdjacencyBuilder::with_dims(dims);
        let catalog = Axis::VARIANTS.iter()
            .flat_map(|&axis| {
                let (lines, length) = axis.lines(dims);
                iproduct!(0..lines, 1..length)
                    .map(move |(index, amount)| Transform::rotate(dims, axis, index, amount))
            })
            .map(|transform| builder.build(transform))
            .collect_vec();

        debug!(width, height, %grouping, moves = catalog.len(), "built move catalog");

        Ok(Self { dims, grouping, catalog })
    }

    /// `(width, height)` of the boards this solver accepts.
    pub fn dims(&self) -> (usize, usize) {
        (self.dims.0.get(), self.dims.1.get())
    }

    /// How this solver forms groups.
    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Every candidate move with its graph, in search order.
    pub fn catalog(&self) -> &[TransformGraph] {
        &self.catalog
    }

    /// Score every catalog entry against `board`, in search order, whether or not it reaches `min_score`.
    ///
    /// `min_score` is also the smallest group that counts towards a score; negative values count as zero.
    pub fn scores<'a, C: PartialEq>(&'a self, board: &'a Board<C>, min_score: isize) -> Result<impl Iterator<Item = ScoredMove<'a>> + 'a, SolverError> {
        self.check_shape(board)?;
        let threshold = threshold(min_score);

        Ok(self.catalog.iter().map(move |graph| {
            let score = group_score(board, graph, threshold, self.grouping);
            trace!(transform = %graph.transform(), score, "scored move");
            ScoredMove { transform: graph.transform(), score }
        }))
    }

    /// The first move in search order scoring at least `min_score`, without looking further.
    pub fn find_first_move<'a, C: PartialEq>(&'a self, board: &'a Board<C>, min_score: isize) -> Result<Option<ScoredMove<'a>>, SolverError> {
        let threshold = threshold(min_score);
        let found = self.scores(board, min_score)?
            .find(|candidate| candidate.score >= threshold);

        log_choice("first", &found);
        Ok(found)
    }

    /// The highest scoring move among those scoring at least `min_score`.
    /// Of equally scoring moves, the earliest in search order wins.
    pub fn find_best_move<'a, C: PartialEq>(&'a self, board: &'a Board<C>, min_score: isize) -> Result<Option<ScoredMove<'a>>, SolverError> {
        let threshold = threshold(min_score);
        let found = self.scores(board, min_score)?
            .filter(|candidate| candidate.score >= threshold)
            .fold(None, |best: Option<ScoredMove>, candidate| match best {
                Some(best) if best.score >= candidate.score => Some(best),
                _ => Some(candidate),
            });

        log_choice("best", &found);
        Ok(found)
    }

    fn check_shape<C>(&self, board: &Board<C>) -> Result<(), SolverError> {
        match board.dims() {
            found if found == self.dims() => Ok(()),
            found => Err(SolverError::ShapeMismatch { expected: self.dims(), found }),
        }
    }
}

#[inline]
fn threshold(min_score: isize) -> usize {
    usize::try_from(min_score).unwrap_or(0)
}

fn log_choice(search: &str, found: &Option<ScoredMove>) {
    match found {
        Some(found) => debug!(search, transform = %found.transform, score = found.score, "found move"),
        None => debug!(search, "no move qualifies"),
    }
}
