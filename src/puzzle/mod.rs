//! Loop puzzles: a grid with numeric clues on some of its faces

pub use self::line_state::LineState;

use std::fmt;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::collections::Dsf;
use crate::error::{InvalidPuzzle, ParsePuzzleError, PuzzleFromFileError};
use crate::grid::{FaceId, Grid, GridShape};
use crate::puzzle::parse::parse_puzzle;

mod generate;
mod line_state;
mod parse;
pub mod render;

/// The number of lines required around a face
pub type Clue = usize;

/// A loop puzzle
///
/// The grid is shared so that copies of a puzzle with different clues are cheap.
#[derive(Clone, Debug)]
pub struct Puzzle {
    grid: Arc<Grid>,
    /// one entry per face
    clues: Box<[Option<Clue>]>,
}

impl Puzzle {
    pub fn new(grid: Arc<Grid>, clues: Vec<Option<Clue>>) -> Result<Self, InvalidPuzzle> {
        if clues.len() != grid.num_faces() {
            return Err(InvalidPuzzle::new(format!(
                "{} clues given for {} faces",
                clues.len(),
                grid.num_faces()
            )));
        }
        for (f, clue) in clues.iter().enumerate() {
            if let Some(clue) = *clue {
                let order = grid.face(f).order();
                if clue > order {
                    return Err(InvalidPuzzle::new(format!(
                        "clue {} on face {} exceeds its {} edges",
                        clue, f, order
                    )));
                }
            }
        }
        Ok(Self {
            grid,
            clues: clues.into_boxed_slice(),
        })
    }

    /// A puzzle with no clues at all
    pub fn without_clues(grid: Arc<Grid>) -> Self {
        let clues = vec![None; grid.num_faces()].into_boxed_slice();
        Self { grid, clues }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleFromFileError> {
        let s = fs::read_to_string(path)?;
        let puzzle = Self::parse(&s)?;
        Ok(puzzle)
    }

    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        parse_puzzle(s)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn clue(&self, face: FaceId) -> Option<Clue> {
        self.clues[face]
    }

    pub fn clues(&self) -> &[Option<Clue>] {
        &self.clues
    }

    /// The number of faces with a clue
    pub fn clue_count(&self) -> usize {
        self.clues.iter().filter(|c| c.is_some()).count()
    }

    /// A copy of this puzzle with the clue of one face replaced
    pub fn with_clue(&self, face: FaceId, clue: Option<Clue>) -> Result<Self, InvalidPuzzle> {
        let mut clues = self.clues.to_vec();
        clues[face] = clue;
        Self::new(Arc::clone(&self.grid), clues)
    }

    /// Checks that the YES lines form a single loop which satisfies every clue
    pub fn verify_solution(&self, lines: &[LineState]) -> bool {
        let grid = self.grid();
        if lines.len() != grid.num_edges() {
            return false;
        }
        let satisfied = grid.faces().iter().zip(self.clues.iter()).all(|(face, clue)| {
            clue.map_or(true, |clue| {
                face.edges().iter().filter(|&&e| lines[e] == LineState::Yes).count() == clue
            })
        });
        if !satisfied {
            return false;
        }
        let mut degrees = vec![0; grid.num_dots()];
        let mut dsf = Dsf::new(grid.num_dots());
        let mut yes_count = 0;
        for (e, edge) in grid.edges().iter().enumerate() {
            if lines[e] == LineState::Yes {
                degrees[edge.dot1()] += 1;
                degrees[edge.dot2()] += 1;
                dsf.merge(edge.dot1(), edge.dot2());
                yes_count += 1;
            }
        }
        if yes_count == 0 || degrees.iter().any(|&d| d != 0 && d != 2) {
            return false;
        }
        // a single cycle visits exactly as many dots as it has edges
        let start = match degrees.iter().position(|&d| d == 2) {
            Some(d) => d,
            None => return false,
        };
        dsf.size(start) == yes_count
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = match self.grid.shape() {
            GridShape::Square { width, height } => {
                writeln!(f, "square {} {}", width, height)?;
                width
            }
            GridShape::Honeycomb { width, height } => {
                writeln!(f, "honeycomb {} {}", width, height)?;
                width
            }
            GridShape::Custom => self.clues.len(),
        };
        for row in self.clues.chunks(width) {
            for clue in row {
                match clue {
                    Some(clue) => write!(f, "{}", clue)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::grid::Grid;
    use crate::puzzle::{LineState, Puzzle};

    fn square_lines(grid: &Grid, faces: &[usize]) -> Vec<LineState> {
        // boundary of a set of faces: edges with exactly one side in the set
        grid.edges()
            .iter()
            .map(|e| {
                let inside = e.faces().filter(|f| faces.contains(f)).count();
                if inside == 1 {
                    LineState::Yes
                } else {
                    LineState::No
                }
            })
            .collect()
    }

    #[test]
    fn clue_too_big() {
        let grid = Arc::new(Grid::square(1, 1).unwrap());
        assert!(Puzzle::new(Arc::clone(&grid), vec![Some(5)]).is_err());
        assert!(Puzzle::new(Arc::clone(&grid), vec![Some(4)]).is_ok());
        assert!(Puzzle::new(grid, vec![]).is_err());
    }

    #[test]
    fn verify_single_loop() {
        let grid = Arc::new(Grid::square(2, 2).unwrap());
        let puzzle = Puzzle::new(Arc::clone(&grid), vec![Some(2), Some(2), None, Some(2)]).unwrap();
        let lines = square_lines(&grid, &[0, 1, 2, 3]);
        assert!(puzzle.verify_solution(&lines));
        let lines = square_lines(&grid, &[0]);
        assert!(!puzzle.verify_solution(&lines));
    }

    #[test]
    fn verify_two_loops() {
        let grid = Arc::new(Grid::square(3, 1).unwrap());
        let puzzle = Puzzle::without_clues(Arc::clone(&grid));
        assert!(puzzle.verify_solution(&square_lines(&grid, &[0])));
        assert!(!puzzle.verify_solution(&square_lines(&grid, &[0, 2])));
        assert!(!puzzle.verify_solution(&square_lines(&grid, &[])));
    }

    #[test]
    fn with_clue() {
        let grid = Arc::new(Grid::square(2, 1).unwrap());
        let puzzle = Puzzle::without_clues(grid);
        let puzzle = puzzle.with_clue(1, Some(3)).unwrap();
        assert_eq!(puzzle.clues(), &[None, Some(3)]);
        assert_eq!(puzzle.clue_count(), 1);
        assert_eq!(puzzle.to_string(), "square 2 1\n.3\n");
    }
}
