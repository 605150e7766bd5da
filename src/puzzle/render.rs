//! Text pictures of puzzles and their lines

use std::char;

use itertools::Itertools;

use crate::grid::{GridShape, SQUARE_TILE_SIZE};
use crate::puzzle::{LineState, Puzzle};

/// Draws a square grid puzzle with `+` dots, `-` and `|` lines, `x` where there is no line and
/// clues in the cells. Returns `None` if the grid is not a square grid.
pub fn format_square(puzzle: &Puzzle, lines: &[LineState]) -> Option<String> {
    let (width, height) = match puzzle.grid().shape() {
        GridShape::Square { width, height } => (width, height),
        _ => return None,
    };
    let grid = puzzle.grid();
    let (cols, rows) = (2 * width + 1, 2 * height + 1);
    let mut canvas = vec![vec![' '; cols]; rows];
    let cell = |v: i32| (v / SQUARE_TILE_SIZE) as usize;

    for dot in grid.dots() {
        canvas[2 * cell(dot.point().y)][2 * cell(dot.point().x)] = '+';
    }
    for (e, edge) in grid.edges().iter().enumerate() {
        let (p1, p2) = (grid.dot(edge.dot1()).point(), grid.dot(edge.dot2()).point());
        let c = match lines[e] {
            LineState::Yes if p1.y == p2.y => '-',
            LineState::Yes => '|',
            LineState::No => 'x',
            LineState::Unknown => ' ',
        };
        canvas[cell(p1.y) + cell(p2.y)][cell(p1.x) + cell(p2.x)] = c;
    }
    for (f, clue) in puzzle.clues().iter().enumerate() {
        if let Some(clue) = *clue {
            let (x, y) = (f % width, f / width);
            canvas[2 * y + 1][2 * x + 1] = char::from_digit(clue as u32, 10).unwrap_or('?');
        }
    }

    Some(canvas.iter().map(|row| row.iter().collect::<String>()).join("\n"))
}

/// Draws a square grid puzzle, or lists the YES lines of any other grid
pub fn format_lines(puzzle: &Puzzle, lines: &[LineState]) -> String {
    format_square(puzzle, lines).unwrap_or_else(|| {
        let yes = lines
            .iter()
            .enumerate()
            .filter(|&(_, &line)| line == LineState::Yes)
            .map(|(e, _)| e)
            .join(" ");
        format!("lines: {}", yes)
    })
}
