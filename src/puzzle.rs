//! Puzzle ingestion: a puzzle file is a JSON array of row strings, `.` for a
//! blank cell and `0`-`9` for a clue. Malformed input is rejected here,
//! before the solver ever sees a board.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::Board;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),
    #[error("puzzle file is not a JSON array of row strings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("puzzle grid is empty")]
    EmptyGrid,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid cell {found:?} at row {row}, column {column} (expected '.' or '0'-'9')")]
    InvalidCell {
        row: usize,
        column: usize,
        found: char,
    },
}

/// Reads and parses a puzzle file into a fresh board.
pub fn load(path: &Path) -> Result<Board, PuzzleError> {
    let contents = fs::read_to_string(path)?;
    parse(&contents)
}

/// Parses puzzle JSON, validating shape and cell characters, and transposes
/// the row-major input into the board's (x, y) addressing.
pub fn parse(input: &str) -> Result<Board, PuzzleError> {
    let lines: Vec<String> = serde_json::from_str(input)?;
    if lines.is_empty() || lines[0].is_empty() {
        return Err(PuzzleError::EmptyGrid);
    }

    let expected = lines[0].chars().count();
    let mut rows = Vec::with_capacity(lines.len());
    for (y, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != expected {
            return Err(PuzzleError::RaggedRow {
                row: y,
                len,
                expected,
            });
        }
        let mut row = Vec::with_capacity(expected);
        for (x, c) in line.chars().enumerate() {
            match c {
                '.' => row.push(None),
                '0'..='9' => row.push(Some(c as u8 - b'0')),
                _ => {
                    return Err(PuzzleError::InvalidCell {
                        row: y,
                        column: x,
                        found: c,
                    })
                }
            }
        }
        rows.push(row);
    }

    Ok(Board::from_rows(&rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_puzzle() {
        let board = parse(r#"["..3", ".4."]"#).unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
        assert_eq!(board.cell(2, 0).unwrap().value, Some(3));
        assert_eq!(board.cell(1, 1).unwrap().value, Some(4));
        assert_eq!(board.cell(0, 0).unwrap().value, None);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = parse(r#"["...", ".."]"#).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_characters() {
        let err = parse(r#"[".a."]"#).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::InvalidCell {
                row: 0,
                column: 1,
                found: 'a'
            }
        ));
    }

    #[test]
    fn test_parse_rejects_empty_grid() {
        assert!(matches!(parse("[]").unwrap_err(), PuzzleError::EmptyGrid));
        assert!(matches!(
            parse(r#"[""]"#).unwrap_err(),
            PuzzleError::EmptyGrid
        ));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(
            parse("not json").unwrap_err(),
            PuzzleError::Json(_)
        ));
    }
}
