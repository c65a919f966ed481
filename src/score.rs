use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantArray};

use crate::board::Board;
use crate::error::SolverError;
use crate::graph::{Edge, TransformGraph};
use crate::location::Location;

/// How matching cells are gathered into groups while scoring.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, VariantArray, strum::Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// Single-pass representative assignment, matching the scores of the tool this solver drives.
    ///
    /// When an edge joins two cells that already lead different groups, the groups are not merged.
    /// A cell can therefore land in more than one group and be counted more than once.
    #[default]
    Reference,
    /// Disjoint-set union; every cell belongs to exactly one group and groups are true connected components.
    UnionFind,
}

/// Score `board` under `graph`: the total size of all groups of at least `min_group_size` matching cells.
///
/// Cells with no matching neighbor form no group.
/// Fails with [`SolverError::ShapeMismatch`] if `board` is not the shape `graph` was built for.
pub fn score<C: PartialEq>(board: &Board<C>, graph: &TransformGraph, min_group_size: usize, grouping: Grouping) -> Result<usize, SolverError> {
    let expected = graph.transform().dims();
    if board.dims() != expected {
        return Err(SolverError::ShapeMismatch { expected, found: board.dims() });
    }

    Ok(group_score(board, graph, min_group_size, grouping))
}

/// [`score`] without the shape check.
pub(crate) fn group_score<C: PartialEq>(board: &Board<C>, graph: &TransformGraph, min_group_size: usize, grouping: Grouping) -> usize {
    let sizes = match grouping {
        Grouping::Reference => reference_group_sizes(board, graph),
        Grouping::UnionFind => union_find_group_sizes(board, graph),
    };

    sizes.into_iter()
        .filter(|size| *size >= min_group_size)
        .sum()
}

fn matching_edges<'a, C: PartialEq>(board: &'a Board<C>, graph: &'a TransformGraph) -> impl Iterator<Item = &'a Edge> + 'a {
    graph.edges().iter().filter(move |edge| board[edge.src] == board[edge.dst])
}

fn reference_group_sizes<C: PartialEq>(board: &Board<C>, graph: &TransformGraph) -> Vec<usize> {
    let mut representatives: HashMap<Location, Location> = HashMap::new();
    let mut groups: HashMap<Location, HashSet<Location>> = HashMap::new();

    for &Edge { src, dst } in matching_edges(board, graph) {
        let representative = if let Some(&representative) = representatives.get(&src) {
            // src's group wins; dst keeps its old group but loses its representative
            representatives.remove(&dst);
            representative
        } else if let Some(&representative) = representatives.get(&dst) {
            representative
        } else {
            // only founding members are ever given a representative
            representatives.insert(src, src);
            representatives.insert(dst, src);
            src
        };

        groups.entry(representative).or_default().extend([src, dst]);
    }

    groups.into_values().map(|group| group.len()).collect()
}

fn union_find_group_sizes<C: PartialEq>(board: &Board<C>, graph: &TransformGraph) -> Vec<usize> {
    let (w, h) = board.dims();
    let mut sets = UnionFind::<usize>::new(w * h);
    let mut grouped = vec![false; w * h];

    for edge in matching_edges(board, graph) {
        let (a, b) = (edge.src.flat(w), edge.dst.flat(w));
        sets.union(a, b);
        grouped[a] = true;
        grouped[b] = true;
    }

    grouped.iter()
        .positions(|grouped| *grouped)
        .map(|cell| sets.find_mut(cell))
        .counts()
        .into_values()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use crate::board::Board;
    use crate::builder::AdjacencyBuilder;
    use crate::cell::Tile;
    use crate::error::SolverError;
    use crate::score::{score, Grouping};
    use crate::transform::Transform;

    fn plain_grid_score(board: &str, min_group_size: usize, grouping: Grouping) -> usize {
        let board: Board<Tile<char>> = board.parse().unwrap();
        let (w, h) = board.dims();
        let dims = (NonZero::new(w).unwrap(), NonZero::new(h).unwrap());
        let graph = AdjacencyBuilder::with_dims(dims).build(Transform::identity(dims));
        score(&board, &graph, min_group_size, grouping).unwrap()
    }

    #[test]
    fn uniform_board_saturates_under_union_find() {
        for (w, h) in [(1, 1), (3, 3), (4, 2), (7, 6), (1, 5)] {
            let board = vec!["X".repeat(w); h].join("\n");
            // a lone cell never forms a group
            let expected = if w * h == 1 { 0 } else { w * h };
            assert_eq!(plain_grid_score(&board, 1, Grouping::UnionFind), expected, "{w}x{h}");
        }
    }

    #[test]
    fn reference_grouping_overcounts_uniform_board() {
        assert_eq!(plain_grid_score("XXX\nXXX\nXXX", 1, Grouping::Reference), 17);
        assert_eq!(plain_grid_score("XX\nXX", 1, Grouping::Reference), 6);
    }

    #[test]
    fn reference_grouping_does_not_merge() {
        // (0, 0)-(0, 1) and (2, 0)-(2, 1) each found their own group before row 1 joins them
        assert_eq!(plain_grid_score("ABA\nAAA", 1, Grouping::Reference), 6);
        assert_eq!(plain_grid_score("ABA\nAAA", 1, Grouping::UnionFind), 5);
    }

    #[test]
    fn threshold_drops_small_groups() {
        let board = "AAB\nCDB\nCDD";
        assert_eq!(plain_grid_score(board, 2, Grouping::UnionFind), 9);
        assert_eq!(plain_grid_score(board, 3, Grouping::UnionFind), 3);
        assert_eq!(plain_grid_score("AAB\nCDD\nCDD", 3, Grouping::UnionFind), 4);
    }

    #[test]
    fn unclassified_cells_match_each_other() {
        assert_eq!(plain_grid_score("..\nAB", 2, Grouping::UnionFind), 2);
        assert_eq!(plain_grid_score("..\nAB", 2, Grouping::Reference), 2);
    }

    #[test]
    fn no_matches_scores_zero() {
        assert_eq!(plain_grid_score("AB\nCD", 0, Grouping::Reference), 0);
        assert_eq!(plain_grid_score("AB\nCD", 0, Grouping::UnionFind), 0);
    }

    #[test]
    fn rejects_wrong_shape() {
        let board: Board<Tile<char>> = "AB\nCD".parse().unwrap();
        let dims = (NonZero::new(3).unwrap(), NonZero::new(2).unwrap());
        let graph = AdjacencyBuilder::with_dims(dims).build(Transform::identity(dims));
        assert_eq!(
            score(&board, &graph, 1, Grouping::Reference),
            Err(SolverError::ShapeMismatch { expected: (3, 2), found: (2, 2) }),
        );
    }
}
