use log::trace;

use crate::model::{Board, CellState, ClueCell};

/// Result of one propagation pass over the worklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// At least one cell changed state; another pass may deduce more.
    Progressed,
    /// Fixpoint: no deduction rule produced a change.
    Stalled,
    /// A clue's feasibility bound is violated; the whole branch is dead.
    Infeasible,
}

/// Runs one pass: applies the deduction rules to every worklist entry, then
/// drops entries whose neighborhood has no `Untouched` cells left. An
/// infeasible clue short-circuits the pass immediately.
pub fn sweep(board: &mut Board, worklist: &mut Vec<ClueCell>) -> PassOutcome {
    let mut changed = false;
    for i in 0..worklist.len() {
        let clue = worklist[i];
        match apply_rules(board, clue) {
            Some(rule_changed) => changed |= rule_changed,
            None => {
                trace!(target: "propagator", "infeasible at {:?}", clue);
                return PassOutcome::Infeasible;
            }
        }
    }

    worklist.retain(|clue| board.tally(clue.x, clue.y).untouched > 0);

    if changed {
        PassOutcome::Progressed
    } else {
        PassOutcome::Stalled
    }
}

/// Applies the deduction rules for a single clue cell. Returns whether any
/// neighbor changed state, or `None` when the feasibility bound fails.
fn apply_rules(board: &mut Board, clue: ClueCell) -> Option<bool> {
    let tally = board.tally(clue.x, clue.y);
    let value = clue.value as usize;

    // Feasibility bound, checked before any rule: the clue must still be
    // able to reach its value with the untouched cells it has left.
    let need = value as isize - tally.filled as isize;
    if need < 0 || need > tally.untouched as isize {
        return None;
    }

    if tally.total() == value {
        // every in-bounds neighbor must be filled
        let changed = board.set_neighborhood(clue.x, clue.y, CellState::Filled);
        if changed {
            trace!(target: "propagator", "{:?}: neighbor count equals value, filled all", clue);
        }
        return Some(changed);
    }
    if value == 0 {
        let changed = board.set_neighborhood(clue.x, clue.y, CellState::Empty);
        if changed {
            trace!(target: "propagator", "{:?}: zero clue, emptied all", clue);
        }
        return Some(changed);
    }
    if tally.untouched as isize == need {
        // only enough slots remain: all of them are filled
        let changed = board.set_neighborhood(clue.x, clue.y, CellState::Filled);
        if changed {
            trace!(target: "propagator", "{:?}: untouched equals need, filled rest", clue);
        }
        return Some(changed);
    }
    if tally.filled == value {
        // already satisfied: everything left is empty
        let changed = board.set_neighborhood(clue.x, clue.y, CellState::Empty);
        if changed {
            trace!(target: "propagator", "{:?}: clue satisfied, emptied rest", clue);
        }
        return Some(changed);
    }

    Some(apply_pair_rules(board, clue))
}

/// Heuristic pairwise rules between axis-adjacent clues. These only ever
/// write through `try_set_all`, so a wrong guess shows up as an infeasible
/// bound later rather than as a reversed cell.
fn apply_pair_rules(board: &mut Board, clue: ClueCell) -> bool {
    let (x, y) = (clue.x as isize, clue.y as isize);
    let value = clue.value;
    let column = |cx: isize| [(cx, y - 1), (cx, y), (cx, y + 1)];
    let row = |ry: isize| [(x - 1, ry), (x, ry), (x + 1, ry)];

    let left = axis_clue(board, x - 1, y);
    let right = axis_clue(board, x + 1, y);
    let up = axis_clue(board, x, y - 1);
    let down = axis_clue(board, x, y + 1);

    let mut changed = false;

    // A gap of 3+ between adjacent clues forces the far side of the larger
    // one fully filled: the shared overlap cannot absorb the difference.
    if left.is_some_and(|lv| value as i16 - lv as i16 >= 3) {
        changed |= board.try_set_all(column(x + 1), CellState::Filled);
    }
    if right.is_some_and(|rv| value as i16 - rv as i16 >= 3) {
        changed |= board.try_set_all(column(x - 1), CellState::Filled);
    }
    if up.is_some_and(|uv| value as i16 - uv as i16 >= 3) {
        changed |= board.try_set_all(row(y + 1), CellState::Filled);
    }
    if down.is_some_and(|dv| value as i16 - dv as i16 >= 3) {
        changed |= board.try_set_all(row(y - 1), CellState::Filled);
    }

    // Equal clues straddling a near-boundary pair: the boundary clips the
    // neighbor's neighborhood, so the row/column only the inner clue sees
    // must contribute nothing.
    let width = board.width() as isize;
    let height = board.height() as isize;

    if y == 1 && up == Some(value) {
        changed |= board.try_set_all(row(y + 1), CellState::Empty);
    }
    if y == height - 2 && down == Some(value) {
        changed |= board.try_set_all(row(y - 1), CellState::Empty);
    }
    if x == 1 && left == Some(value) {
        changed |= board.try_set_all(column(x + 1), CellState::Empty);
    }
    if x == width - 2 && right == Some(value) {
        changed |= board.try_set_all(column(x - 1), CellState::Empty);
    }

    if changed {
        trace!(target: "propagator", "{:?}: pair rule wrote neighbors", clue);
    }
    changed
}

fn axis_clue(board: &Board, x: isize, y: isize) -> Option<u8> {
    if x < 0 || y < 0 {
        return None;
    }
    board.cell(x as usize, y as usize).and_then(|cell| cell.value)
}
