use std::collections::HashSet;

use unordered_pair::UnorderedPair;

use crate::location::Location;
use crate::transform::Transform;

/// "`src` and `dst` are adjacent once the transform is applied", in original board coordinates.
///
/// Edges are stored directed, in the order they were emitted, but describe a symmetric relation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Edge {
    /// The cell whose right or down neighbor this edge records.
    pub src: Location,
    /// That neighbor.
    pub dst: Location,
}

/// The adjacency a [`Transform`] induces on a board of fixed shape, independent of what is on the board.
///
/// Built by an [`AdjacencyBuilder`](crate::builder::AdjacencyBuilder).
#[derive(Clone, Debug)]
pub struct TransformGraph {
    pub(crate) transform: Transform,
    // row-major emission order, right edge before down edge per cell
    pub(crate) edges: Vec<Edge>,
}

impl TransformGraph {
    /// The transform this graph was derived from.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// All edges, in emission order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edges as an undirected set, forgetting order and direction.
    pub fn adjacency(&self) -> HashSet<UnorderedPair<Location>> {
        self.edges.iter()
            .map(|edge| UnorderedPair::from((edge.src, edge.dst)))
            .collect()
    }
}
