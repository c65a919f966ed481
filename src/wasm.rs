//! Bindings for hosting the solver in a browser overlay.
//!
//! Boards cross the boundary as row-major `u32` label vectors; how labels are chosen is up to the host.

use std::num::TryFromIntError;

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::score::Grouping;
use crate::solver::{ScoredMove, Solver};

/// A [`Solver`] owned by JavaScript.
#[wasm_bindgen]
pub struct WasmSolver {
    solver: Solver,
}

/// A chosen move, copied out of the solver.
#[wasm_bindgen]
pub struct WasmMove {
    col_shift: Vec<u32>,
    row_shift: Vec<u32>,
    score: u32,
}

#[wasm_bindgen]
impl WasmSolver {
    /// Build the move catalog for `width` by `height` boards.
    /// `union_find` selects [`Grouping::UnionFind`] over [`Grouping::Reference`].
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, union_find: bool) -> Result<WasmSolver, JsError> {
        let grouping = match union_find {
            true => Grouping::UnionFind,
            false => Grouping::Reference,
        };

        Ok(Self { solver: Solver::with_grouping(width, height, grouping)? })
    }

    /// [`Solver::find_best_move`] over `width * height` row-major labels.
    #[wasm_bindgen(js_name = findBestMove)]
    pub fn find_best_move(&self, cells: Vec<u32>, min_score: isize) -> Result<Option<WasmMove>, JsError> {
        let board = Board::from_shape_vec(self.solver.dims(), cells)?;
        Ok(self.solver.find_best_move(&board, min_score)?.map(WasmMove::try_from).transpose()?)
    }

    /// [`Solver::find_first_move`] over `width * height` row-major labels.
    #[wasm_bindgen(js_name = findFirstMove)]
    pub fn find_first_move(&self, cells: Vec<u32>, min_score: isize) -> Result<Option<WasmMove>, JsError> {
        let board = Board::from_shape_vec(self.solver.dims(), cells)?;
        Ok(self.solver.find_first_move(&board, min_score)?.map(WasmMove::try_from).transpose()?)
    }
}

#[allow(missing_docs)]
#[wasm_bindgen]
impl WasmMove {
    #[wasm_bindgen(getter, js_name = colShift)]
    pub fn col_shift(&self) -> Vec<u32> {
        self.col_shift.clone()
    }

    #[wasm_bindgen(getter, js_name = rowShift)]
    pub fn row_shift(&self) -> Vec<u32> {
        self.row_shift.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl TryFrom<ScoredMove<'_>> for WasmMove {
    type Error = TryFromIntError;

    fn try_from(value: ScoredMove<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            col_shift: narrow(value.transform.col_shift())?,
            row_shift: narrow(value.transform.row_shift())?,
            score: u32::try_from(value.score)?,
        })
    }
}

fn narrow(shifts: &[usize]) -> Result<Vec<u32>, TryFromIntError> {
    shifts.iter().map(|shift| u32::try_from(*shift)).collect()
}
