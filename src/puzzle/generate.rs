use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::puzzle::{LineState, Puzzle};
use crate::solve::{has_unique_solution, Difficulty};

impl Puzzle {
    /// A puzzle with every face clued with the number of YES lines around it
    pub fn from_solution(grid: Arc<Grid>, lines: &[LineState]) -> Self {
        assert_eq!(lines.len(), grid.num_edges());
        let clues = grid
            .faces()
            .iter()
            .map(|face| {
                let count = face
                    .edges()
                    .iter()
                    .filter(|&&e| lines[e] == LineState::Yes)
                    .count();
                Some(count)
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { grid, clues }
    }

    /// Removes clues in random order, keeping each removal only if the puzzle can still be
    /// solved at the given difficulty. A puzzle that cannot be solved to begin with is
    /// returned unchanged.
    pub fn minimize_clues<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Self {
        let mut puzzle = self.clone();
        if !has_unique_solution(&puzzle, difficulty) {
            info!("puzzle is not solvable at difficulty {}", difficulty);
            return puzzle;
        }
        let mut faces: Vec<_> = (0..puzzle.grid.num_faces())
            .filter(|&f| puzzle.clues[f].is_some())
            .collect();
        faces.shuffle(rng);
        for f in faces {
            let clue = puzzle.clues[f].take();
            if !has_unique_solution(&puzzle, difficulty) {
                puzzle.clues[f] = clue;
            }
        }
        info!(
            "kept {} of {} clues at difficulty {}",
            puzzle.clue_count(),
            self.clue_count(),
            difficulty
        );
        puzzle
    }
}
