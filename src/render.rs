//! SVG board rendering: the graphical counterpart of the text renderer,
//! for visually inspecting input grids and solve results.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::model::{Board, CellState};

const CELL_SIZE: usize = 30;

/// Renders the board as an SVG document. Empty cells are gray squares,
/// Filled cells black, Untouched cells white; clue digits are overlaid in
/// black, or white on a filled cell.
pub fn board_to_svg(board: &Board) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        board.width() * CELL_SIZE,
        board.height() * CELL_SIZE,
    );

    for y in 0..board.height() {
        for x in 0..board.width() {
            let cell = board.cell(x, y).expect("coordinates are in bounds");
            let (square, text) = match cell.state {
                CellState::Empty => ("gray", "black"),
                CellState::Filled => ("black", "white"),
                CellState::Untouched => ("white", "black"),
            };
            let _ = writeln!(
                svg,
                r#"  <rect x="{}" y="{}" width="{size}" height="{size}" fill="{}" stroke="black"/>"#,
                x * CELL_SIZE,
                y * CELL_SIZE,
                square,
                size = CELL_SIZE,
            );
            if let Some(value) = cell.value {
                let _ = writeln!(
                    svg,
                    r#"  <text x="{}" y="{}" fill="{}">{}</text>"#,
                    x * CELL_SIZE + CELL_SIZE / 3,
                    y * CELL_SIZE + CELL_SIZE - CELL_SIZE / 3,
                    text,
                    value,
                );
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Writes the board's SVG rendering to `path`, creating parent directories
/// as needed.
pub fn write_svg(board: &Board, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, board_to_svg(board))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_dimensions_match_grid() {
        let board = Board::parse(
            "...
             ...",
        );
        let svg = board_to_svg(&board);
        assert!(svg.contains(r#"width="90" height="60""#));
        // one rect per cell, no clue text
        assert_eq!(svg.matches("<rect").count(), 6);
        assert_eq!(svg.matches("<text").count(), 0);
    }

    #[test]
    fn test_svg_colors_follow_cell_state() {
        let board = Board::parse("XO.");
        let svg = board_to_svg(&board);
        assert!(svg.contains(r#"x="0" y="0" width="30" height="30" fill="black""#));
        assert!(svg.contains(r#"x="30" y="0" width="30" height="30" fill="gray""#));
        assert!(svg.contains(r#"x="60" y="0" width="30" height="30" fill="white""#));
    }

    #[test]
    fn test_svg_overlays_clue_digits() {
        let board = Board::parse("7.");
        let svg = board_to_svg(&board);
        assert!(svg.contains(r#"<text x="10" y="20" fill="black">7</text>"#));
    }

    #[test]
    fn test_svg_clue_digit_is_white_on_filled_cell() {
        let mut board = Board::parse("3.");
        board.try_set_state(0, 0, CellState::Filled);
        let svg = board_to_svg(&board);
        assert!(svg.contains(r#"fill="white">3</text>"#));
    }
}
