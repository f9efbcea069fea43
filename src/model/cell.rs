use serde::{Deserialize, Serialize};

/// Resolution state of a single grid cell. Transitions are monotone: a cell
/// leaves `Untouched` at most once and is never reassigned afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Untouched,
    Empty,
    Filled,
}

/// One grid cell: an optional clue value (0-9, fixed at board construction)
/// and the current resolution state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: Option<u8>,
    pub state: CellState,
}

impl Cell {
    pub fn untouched(value: Option<u8>) -> Self {
        Self {
            value,
            state: CellState::Untouched,
        }
    }

    /// Single-character rendering: the state glyph when resolved, otherwise
    /// the clue digit or `.`.
    pub fn glyph(&self) -> char {
        match self.state {
            CellState::Empty => 'O',
            CellState::Filled => 'X',
            CellState::Untouched => match self.value {
                Some(v) => (b'0' + v) as char,
                None => '.',
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph() {
        assert_eq!(Cell::untouched(None).glyph(), '.');
        assert_eq!(Cell::untouched(Some(7)).glyph(), '7');

        let mut cell = Cell::untouched(Some(3));
        cell.state = CellState::Filled;
        assert_eq!(cell.glyph(), 'X');
        cell.state = CellState::Empty;
        assert_eq!(cell.glyph(), 'O');
    }
}
