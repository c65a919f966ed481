#![warn(missing_docs)]

//! # `rotomatch`
//!
//! A move finder for tile-matching puzzles played by rotating a single row or column of a grid, where a move pays off when it lines up a large enough group of same-colored tiles.
//! Build a [`Solver`] for the board's shape once, then hand it a freshly classified [`Board`] every frame and ask for [`find_best_move`](Solver::find_best_move) or [`find_first_move`](Solver::find_first_move).
//! The result is a [`Transform`] naming the line to rotate and by how much, plus the [`Drag`](transform::Drag) that performs it on screen.
//!
//! Boards may hold any equality-comparable cells; [`Tile`] covers the usual "classifier label or unknown" case.
//!
//! # Internals
//! A board of `w` columns and `h` rows has `w·(h-1) + h·(w-1)` distinct single-line rotations, and which cells touch after a rotation does not depend on their colors.
//! So instead of rotating boards, we express each rotation as a graph over the *original* coordinates, once per board shape:
//!
//! 1. Every cell links to its right and down neighbors as they would be after the move.
//! The rotated line becomes a cycle, broken at the one seam where its ends used to meet.
//! A cell beside the rotated line links to whichever cell slides next to it.
//! See [`AdjacencyBuilder`].
//! 2. Scoring a board walks a graph's edges in a fixed order, gathering equal-colored endpoints into groups.
//! Groups smaller than the caller's threshold are ignored and the rest are summed.
//! See [`score`] and [`Grouping`] for the two ways groups may be formed.
//!
//! Each search is then a single pass of color comparisons over the precomputed catalog.

pub use board::Board;
pub use builder::AdjacencyBuilder;
pub use cell::Tile;
pub use error::{BoardError, SolverError};
pub use graph::{Edge, TransformGraph};
pub use location::{Dimension, Location};
pub use score::{score, Grouping};
pub use solver::{ScoredMove, Solver};
pub use transform::{Axis, Drag, Transform};

pub(crate) mod board;
pub mod builder;
pub(crate) mod cell;
pub(crate) mod error;
pub(crate) mod graph;
pub(crate) mod location;
pub(crate) mod score;
pub(crate) mod solver;
pub mod transform;
#[cfg(feature = "wasm")]
pub mod wasm;
