use serde::{Deserialize, Serialize};

use super::{Cell, CellState, ClueCell};
use crate::geometry;

/// Per-neighborhood state counts for one clue cell, taken over the in-bounds
/// 3x3 neighborhood only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodTally {
    pub filled: usize,
    pub empty: usize,
    pub untouched: usize,
}

impl NeighborhoodTally {
    /// Number of in-bounds neighbors: 4 at a corner, 6 on an edge, 9 interior.
    pub fn total(&self) -> usize {
        self.filled + self.empty + self.untouched
    }
}

/// The puzzle grid: a single owned contiguous buffer of cells in (x, y)
/// addressing, where x indexes columns and y indexes rows. Branch search
/// duplicates the whole board per candidate via `Clone`; no board is ever
/// shared between branches.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    // column-major: index = x * height + y
    cells: Vec<Cell>,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.cells[x * self.height + y].glyph())?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n{}", self)
    }
}

impl Board {
    /// Builds a board from row-major input (one inner sequence per row, as
    /// read from the puzzle file), transposing into (x, y) addressing.
    /// Rows must be rectangular; the ingestion layer rejects ragged input
    /// before this is reached.
    pub fn from_rows(rows: &[Vec<Option<u8>>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        debug_assert!(rows.iter().all(|row| row.len() == width));

        let mut cells = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                cells.push(Cell::untouched(rows[y][x]));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked access. Out-of-bounds coordinates are not an error,
    /// they are simply absent.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(&self.cells[x * self.height + y])
    }

    /// Sets the state of `(x, y)` only if it is currently `Untouched`.
    /// Returns whether a write happened; already-resolved cells and
    /// out-of-bounds coordinates are a no-op.
    pub fn try_set_state(&mut self, x: usize, y: usize, state: CellState) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let cell = &mut self.cells[x * self.height + y];
        if cell.state != CellState::Untouched {
            return false;
        }
        cell.state = state;
        true
    }

    /// Applies `try_set_state` to each coordinate, silently clipping
    /// off-board ones. Returns whether any cell changed.
    pub fn try_set_all(
        &mut self,
        coords: impl IntoIterator<Item = (isize, isize)>,
        state: CellState,
    ) -> bool {
        let mut changed = false;
        for (x, y) in coords {
            if x < 0 || y < 0 {
                continue;
            }
            changed |= self.try_set_state(x as usize, y as usize, state);
        }
        changed
    }

    /// In-bounds coordinates of the 3x3 neighborhood around `(x, y)`,
    /// including the center.
    pub fn neighborhood(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        geometry::neighborhood(x, y, self.width, self.height)
    }

    /// Sets every `Untouched` cell in the neighborhood of `(x, y)` to
    /// `state`. Returns whether any cell changed.
    pub fn set_neighborhood(&mut self, x: usize, y: usize, state: CellState) -> bool {
        let coords: Vec<(usize, usize)> = self.neighborhood(x, y).collect();
        let mut changed = false;
        for (sx, sy) in coords {
            changed |= self.try_set_state(sx, sy, state);
        }
        changed
    }

    /// Counts the states in the neighborhood of `(x, y)`.
    pub fn tally(&self, x: usize, y: usize) -> NeighborhoodTally {
        let mut tally = NeighborhoodTally {
            filled: 0,
            empty: 0,
            untouched: 0,
        };
        for (sx, sy) in self.neighborhood(x, y) {
            match self.cells[sx * self.height + sy].state {
                CellState::Filled => tally.filled += 1,
                CellState::Empty => tally.empty += 1,
                CellState::Untouched => tally.untouched += 1,
            }
        }
        tally
    }

    /// The `Untouched` coordinates in the neighborhood of `(x, y)`, in the
    /// fixed enumeration order. Branch candidates are drawn from this set.
    pub fn untouched_neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.neighborhood(x, y)
            .filter(|&(sx, sy)| self.cells[sx * self.height + sy].state == CellState::Untouched)
            .collect()
    }

    /// Scans the grid row-major (y outer, x inner) and collects a worklist
    /// entry for every cell carrying a clue.
    pub fn clue_cells(&self) -> Vec<ClueCell> {
        let mut clues = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(value) = self.cells[x * self.height + y].value {
                    clues.push(ClueCell::new(x, y, value));
                }
            }
        }
        clues
    }

    #[cfg(test)]
    /// Parse a board from a glyph grid, one line per row: digits are
    /// untouched clue cells, `.` untouched blanks, `O` empty, `X` filled.
    pub fn parse(input: &str) -> Self {
        let lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let height = lines.len();
        let width = lines.first().map_or(0, |l| l.chars().count());

        let mut board = Self {
            width,
            height,
            cells: vec![Cell::untouched(None); width * height],
        };
        for (y, line) in lines.iter().enumerate() {
            assert_eq!(line.chars().count(), width, "ragged test fixture");
            for (x, c) in line.chars().enumerate() {
                let cell = &mut board.cells[x * height + y];
                match c {
                    '.' => {}
                    'O' => cell.state = CellState::Empty,
                    'X' => cell.state = CellState::Filled,
                    '0'..='9' => cell.value = Some(c as u8 - b'0'),
                    _ => panic!("bad glyph {:?} in test fixture", c),
                }
            }
        }
        board
    }
}
