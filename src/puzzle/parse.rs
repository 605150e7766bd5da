//! Parse puzzles from text
//!
//! The first line names the grid shape and its width and height, e.g. `square 5 4`. Each
//! following line is one row of faces, with a digit for each clue and `.` for a face without
//! one. Blank lines are ignored.

use std::sync::Arc;

use crate::error::{ParseError, ParsePuzzleError, ParsePuzzleErrorType, UNEXPECTED_END};
use crate::grid::Grid;
use crate::puzzle::{Clue, Puzzle};

/// parse a `Puzzle` from a string
pub(crate) fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut lines = s
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());
    let (i, header) = lines.next().ok_or(UNEXPECTED_END)?;
    let mut tokens = header.split_whitespace();
    let shape = tokens.next().ok_or(UNEXPECTED_END)?;
    let width = read_size(tokens.next(), i)?;
    let height = read_size(tokens.next(), i)?;
    if let Some(token) = tokens.next() {
        return Err(ParseError::new(ParsePuzzleErrorType::UnexpectedToken, token, i).into());
    }
    let grid = match shape {
        "square" => Grid::square(width, height)?,
        "honeycomb" => Grid::honeycomb(width, height)?,
        _ => return Err(ParseError::new(ParsePuzzleErrorType::InvalidShape, shape, i).into()),
    };
    let mut clues = Vec::with_capacity(grid.num_faces());
    for _ in 0..height {
        let (i, row) = lines.next().ok_or(UNEXPECTED_END)?;
        let len = clues.len();
        for c in row.chars() {
            clues.push(read_clue(c, i)?);
        }
        if clues.len() - len != width {
            return Err(ParseError::new(ParsePuzzleErrorType::RowLength, row, i).into());
        }
    }
    if let Some((i, line)) = lines.next() {
        return Err(ParseError::new(ParsePuzzleErrorType::UnexpectedToken, line, i).into());
    }
    let puzzle = Puzzle::new(Arc::new(grid), clues)?;
    Ok(puzzle)
}

fn read_size(token: Option<&str>, line: usize) -> Result<usize, ParseError> {
    let token = token.ok_or(UNEXPECTED_END)?;
    token
        .parse()
        .map_err(|_| ParseError::new(ParsePuzzleErrorType::InvalidSize, token, line))
}

fn read_clue(c: char, line: usize) -> Result<Option<Clue>, ParseError> {
    if c == '.' {
        return Ok(None);
    }
    c.to_digit(10)
        .map(|d| Some(d as Clue))
        .ok_or_else(|| ParseError::new(ParsePuzzleErrorType::InvalidClue, c, line))
}
