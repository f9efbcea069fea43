mod board;
mod cell;
mod clue_cell;

pub use board::{Board, NeighborhoodTally};
pub use cell::{Cell, CellState};
pub use clue_cell::ClueCell;
