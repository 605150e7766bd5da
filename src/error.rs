use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

/// The current solver state cannot lead to a solution
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("contradiction")]
pub struct Contradiction;

#[derive(Error, Debug)]
#[error("invalid grid: {}", msg)]
pub struct InvalidGrid {
    msg: String,
}

impl InvalidGrid {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty \"{}\", expected one of easy, normal, tricky, hard", name)]
pub struct ParseDifficultyError {
    name: String,
}

impl ParseDifficultyError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

#[derive(Error, Debug)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}

pub const UNEXPECTED_END: ParseError = ParseError::from_type(ParsePuzzleErrorType::UnexpectedEnd);

#[derive(Debug, Error)]
pub enum ParsePuzzleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidGrid(#[from] InvalidGrid),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParsePuzzleErrorType,
    token: Option<String>,
    line: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParsePuzzleErrorType, token: impl Display, line: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            line: Some(line),
        }
    }

    pub(crate) const fn from_type(error_type: ParsePuzzleErrorType) -> Self {
        Self {
            error_type,
            token: None,
            line: None,
        }
    }

    pub fn error_type(&self) -> &ParsePuzzleErrorType {
        &self.error_type
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParsePuzzleErrorType {
    InvalidClue,
    InvalidShape,
    InvalidSize,
    RowLength,
    UnexpectedEnd,
    UnexpectedToken,
}

impl Display for ParsePuzzleErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParsePuzzleErrorType::InvalidClue => "Invalid clue",
            ParsePuzzleErrorType::InvalidShape => "Invalid grid shape",
            ParsePuzzleErrorType::InvalidSize => "Invalid grid size",
            ParsePuzzleErrorType::RowLength => "Wrong number of clues in row",
            ParsePuzzleErrorType::UnexpectedEnd => "Unexpected end",
            ParsePuzzleErrorType::UnexpectedToken => "Unexpected token",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(line) = &self.line {
            write!(f, " on line {}", line)?;
        }
        Ok(())
    }
}
