pub mod propagator;
mod search;

pub use propagator::{sweep, PassOutcome};

use crate::model::Board;

/// Result of a top-level solve: the final board, whether every clue is
/// satisfied, and the total number of propagation passes across the whole
/// search (diagnostics/benchmarking). When `solved` is false the board is
/// the last unsuccessful attempt and carries no correctness guarantee.
#[derive(Debug)]
pub struct SolveReport {
    pub board: Board,
    pub solved: bool,
    pub passes: usize,
}

/// Solves the puzzle: builds the initial worklist from every clue cell, then
/// runs propagation and branch search to completion. Single-threaded,
/// synchronous, runs to success or exhaustive failure.
pub fn solve(board: Board) -> SolveReport {
    let worklist = board.clue_cells();
    let mut passes = 0;
    let (board, solved) = search::search(board, worklist, &mut passes);
    SolveReport {
        board,
        solved,
        passes,
    }
}
