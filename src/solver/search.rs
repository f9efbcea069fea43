use itertools::Itertools;
use log::{debug, trace};

use super::propagator::{self, PassOutcome};
use crate::geometry;
use crate::model::{Board, CellState, ClueCell};

/// Depth-first search: propagates to a fixpoint, then branches on the first
/// unresolved clue by trying every locally consistent candidate assignment.
/// Returns the board and whether it satisfies all clues; on failure the board
/// is the last attempt and carries no correctness guarantee.
pub(crate) fn search(
    mut board: Board,
    mut worklist: Vec<ClueCell>,
    passes: &mut usize,
) -> (Board, bool) {
    loop {
        *passes += 1;
        match propagator::sweep(&mut board, &mut worklist) {
            PassOutcome::Progressed => {}
            PassOutcome::Stalled => break,
            PassOutcome::Infeasible => return (board, false),
        }
    }

    if worklist.is_empty() {
        return (board, true);
    }

    let pivot = worklist[0];
    let untouched = board.untouched_neighbors(pivot.x, pivot.y);
    // the stalled pass already checked the feasibility bound, so
    // 0 <= need <= untouched.len() here
    let need = pivot.value as usize - board.tally(pivot.x, pivot.y).filled;
    debug!(
        target: "search",
        "branching on {:?}: choose {} of {} untouched",
        pivot,
        need,
        untouched.len()
    );

    // Locality heuristic: keep resolving the just-touched region first. The
    // pivot itself sorts first at distance zero and stays in the worklist so
    // the next pass's satisfied-clue rule empties its leftover neighbors.
    let mut sorted = worklist;
    sorted.sort_by_key(|clue| geometry::squared_distance((clue.x, clue.y), (pivot.x, pivot.y)));

    let mut last_attempt = None;
    for candidate in untouched.iter().copied().combinations(need) {
        trace!(target: "search", "candidate for {:?}: {:?}", pivot, candidate);
        let mut branch = board.clone();
        for (x, y) in candidate {
            branch.try_set_state(x, y, CellState::Filled);
        }
        let (result, solved) = search(branch, sorted.clone(), passes);
        if solved {
            return (result, true);
        }
        last_attempt = Some(result);
    }

    // every candidate failed; the last attempt is diagnostics only
    (last_attempt.unwrap_or(board), false)
}
