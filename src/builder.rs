//! Turning moves into adjacency graphs.

use crate::graph::{Edge, TransformGraph};
use crate::location::{wrapping_add, wrapping_sub, Dimension, Location};
use crate::transform::Transform;

/// Derives the post-move adjacency of a board without moving any cells.
///
/// Every cell contributes at most a "right" and a "down" edge.
/// A rotated line becomes a cycle broken at a single seam; a cell next to a rotated line links to whichever cell slid beside it.
///
/// The builder trusts its input: transforms should rotate at most one line, as [`Solver`](crate::Solver) catalogs do.
#[derive(Clone, Copy, Debug)]
pub struct AdjacencyBuilder {
    // width, height
    dims: (Dimension, Dimension),
}

impl AdjacencyBuilder {
    /// Construct a builder for boards of the specified dimensions, specified in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self { dims }
    }

    /// Derive the [`TransformGraph`] of `transform`.
    ///
    /// Edges are emitted row-major, the right edge of each cell before its down edge.
    /// Reference grouping depends on this order.
    ///
    /// # Panics
    /// If `transform` was made for boards of other dimensions.
    pub fn build(&self, transform: Transform) -> TransformGraph {
        let (w, h) = (self.dims.0.get(), self.dims.1.get());
        assert_eq!(transform.dims(), (w, h), "transform does not fit a {w}x{h} board");

        let mut edges = Vec::with_capacity(2 * w * h);
        for y in 0..h {
            for x in 0..w {
                let src = Location(x, y);
                if let Some(dst) = self.right_of(src, &transform) {
                    edges.push(Edge { src, dst });
                }
                if let Some(dst) = self.below(src, &transform) {
                    edges.push(Edge { src, dst });
                }
            }
        }

        TransformGraph { transform, edges }
    }

    fn right_of(&self, location: Location, transform: &Transform) -> Option<Location> {
        let (w, h) = (self.dims.0.get(), self.dims.1.get());
        let Location(x, y) = location;

        match transform.row_shift[y] {
            0 => {
                // no wraparound on an untouched row
                let next = location.right_in(w, false)?;
                Some(match (transform.col_shift[next.0], transform.col_shift[x]) {
                    (0, 0) => next,
                    // this column moved down by d, so our neighbor came from d rows further down
                    (0, d) => Location(next.0, wrapping_add(y, d, h)),
                    // the next column moved down by d, so our neighbor came from d rows up
                    (d, _) => Location(next.0, wrapping_sub(y, d, h)),
                })
            }
            // seam at x = w - r - 1; never the last column, so the wrap edge always survives
            r if x + r + 1 == w => None,
            _ => location.right_in(w, true),
        }
    }

    fn below(&self, location: Location, transform: &Transform) -> Option<Location> {
        let (w, h) = (self.dims.0.get(), self.dims.1.get());
        let Location(x, y) = location;

        match transform.col_shift[x] {
            0 => {
                let next = location.down_in(h, false)?;
                Some(match (transform.row_shift[next.1], transform.row_shift[y]) {
                    (0, 0) => next,
                    (0, d) => Location(wrapping_add(x, d, w), next.1),
                    (d, _) => Location(wrapping_sub(x, d, w), next.1),
                })
            }
            r if y + r + 1 == h => None,
            _ => location.down_in(h, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use crate::builder::AdjacencyBuilder;
    use crate::graph::Edge;
    use crate::location::Location;
    use crate::transform::{Axis, Transform};

    fn edges_of(w: usize, h: usize, transform: Transform) -> Vec<(Location, Location)> {
        AdjacencyBuilder::with_dims((NonZero::new(w).unwrap(), NonZero::new(h).unwrap()))
            .build(transform)
            .edges()
            .iter()
            .map(|Edge { src, dst }| (*src, *dst))
            .collect()
    }

    #[test]
    fn identity_is_plain_grid() {
        let dims = (NonZero::new(2).unwrap(), NonZero::new(2).unwrap());
        assert_eq!(edges_of(2, 2, Transform::identity(dims)), vec![
            (Location(0, 0), Location(1, 0)),
            (Location(0, 0), Location(0, 1)),
            (Location(1, 0), Location(1, 1)),
            (Location(0, 1), Location(1, 1)),
        ]);
    }

    #[test]
    fn rotated_row_is_cut_at_seam() {
        // row 1 of a 4x2 board rotated right by 2
        let dims = (NonZero::new(4).unwrap(), NonZero::new(2).unwrap());
        assert_eq!(edges_of(4, 2, Transform::rotate(dims, Axis::Row, 1, 2)), vec![
            (Location(0, 0), Location(1, 0)),
            (Location(0, 0), Location(2, 1)),
            (Location(1, 0), Location(2, 0)),
            (Location(1, 0), Location(3, 1)),
            (Location(2, 0), Location(3, 0)),
            (Location(2, 0), Location(0, 1)),
            (Location(3, 0), Location(1, 1)),
            (Location(0, 1), Location(1, 1)),
            // seam between x = 1 and x = 2
            (Location(2, 1), Location(3, 1)),
            (Location(3, 1), Location(0, 1)),
        ]);
    }

    #[test]
    #[should_panic(expected = "transform does not fit a 4x2 board")]
    fn rejects_transform_of_other_shape() {
        let dims = (NonZero::new(4).unwrap(), NonZero::new(2).unwrap());
        let wider = (NonZero::new(5).unwrap(), NonZero::new(2).unwrap());
        AdjacencyBuilder::with_dims(dims).build(Transform::rotate(wider, Axis::Row, 0, 4));
    }

    #[test]
    fn rotated_column_shifts_neighbors() {
        // column 3 of a 4x2 board rotated down by 1
        let dims = (NonZero::new(4).unwrap(), NonZero::new(2).unwrap());
        assert_eq!(edges_of(4, 2, Transform::rotate(dims, Axis::Column, 3, 1)), vec![
            (Location(0, 0), Location(1, 0)),
            (Location(0, 0), Location(0, 1)),
            (Location(1, 0), Location(2, 0)),
            (Location(1, 0), Location(1, 1)),
            (Location(2, 0), Location(3, 1)),
            (Location(2, 0), Location(2, 1)),
            (Location(0, 1), Location(1, 1)),
            (Location(1, 1), Location(2, 1)),
            (Location(2, 1), Location(3, 0)),
            (Location(3, 1), Location(3, 0)),
        ]);
    }
}
