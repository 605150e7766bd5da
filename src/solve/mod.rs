//! Solve loop puzzles by deduction
//!
//! The solver never guesses. It runs tiers of deductions from cheapest to most expensive,
//! going back to the cheapest tier whenever a tier learns something, and stops when a loop is
//! found, a contradiction is reached or nothing more can be deduced.

pub use self::trace::{Rule, Step};

use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Contradiction, ParseDifficultyError};
use crate::puzzle::{LineState, Puzzle};

use self::easy::trivial_deductions;
use self::hard::linedsf_deductions;
use self::loop_closure::{loop_deductions, LoopOutcome};
use self::normal::dline_deductions;
use self::state::SolverState;

mod dline;
mod easy;
mod hard;
mod loop_closure;
mod normal;
mod state;
mod trace;

/// How hard the deductions a solver may use are
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// counting lines around faces and dots
    Easy,
    /// facts about pairs of adjacent lines
    Normal,
    /// more facts about pairs of lines at a dot
    Tricky,
    /// lines known to be identical or opposite
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Tricky,
        Difficulty::Hard,
    ];

    fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Tricky => "tricky",
            Difficulty::Hard => "hard",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Hard
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError::new(s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    /// The lines form the only solution
    Solved,
    /// The puzzle contradicts itself
    Mistake,
    /// The lines form a solution, but another solution may exist
    Ambiguous,
    /// The solver could not finish the puzzle
    Incomplete,
}

impl Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolveStatus::Solved => "solved",
            SolveStatus::Mistake => "mistake",
            SolveStatus::Ambiguous => "ambiguous",
            SolveStatus::Incomplete => "incomplete",
        };
        f.write_str(s)
    }
}

pub struct SolveResult {
    status: SolveStatus,
    lines: Vec<LineState>,
    steps: Vec<Step>,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        self.status == SolveStatus::Solved
    }

    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// The state of every edge when the solver stopped
    pub fn lines(&self) -> &[LineState] {
        &self.lines
    }

    /// Every line set, in order. Empty unless steps were saved.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// The deduction tiers, cheapest first
#[derive(Clone, Copy, Debug)]
enum Tier {
    Easy,
    Normal,
    Hard,
    LoopClosure,
}

const TIERS: [Tier; 4] = [Tier::Easy, Tier::Normal, Tier::Hard, Tier::LoopClosure];

impl Tier {
    fn enabled(self, difficulty: Difficulty) -> bool {
        match self {
            Tier::Normal => difficulty >= Difficulty::Normal,
            Tier::Hard => difficulty >= Difficulty::Hard,
            Tier::Easy | Tier::LoopClosure => true,
        }
    }
}

pub struct PuzzleSolver<'a> {
    puzzle: &'a Puzzle,
    difficulty: Difficulty,
    start_from: Option<&'a [LineState]>,
    save_steps: bool,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            difficulty: Difficulty::default(),
            start_from: None,
            save_steps: false,
        }
    }

    /// The hardest deductions the solver may use
    pub fn difficulty(&mut self, difficulty: Difficulty) -> &mut Self {
        self.difficulty = difficulty;
        self
    }

    /// Lines known before solving. Panics when solving if there is not one per edge.
    pub fn start_from(&mut self, lines: &'a [LineState]) -> &mut Self {
        self.start_from = Some(lines);
        self
    }

    /// Record every line set by the solver
    pub fn save_steps(&mut self) -> &mut Self {
        self.save_steps = true;
        self
    }

    /// Runs the solver
    ///
    /// # Panics
    ///
    /// Panics if the lines given to `start_from` are not one per edge of the grid
    pub fn solve(&self) -> SolveResult {
        let mut state = SolverState::new(self.puzzle, self.save_steps);
        let status = match self.run(&mut state) {
            Ok(status) => status,
            Err(Contradiction) => SolveStatus::Mistake,
        };
        debug!("{} at difficulty {}", status, self.difficulty);
        let (lines, steps) = state.into_parts();
        debug_assert!(status != SolveStatus::Solved || self.puzzle.verify_solution(&lines));
        SolveResult {
            status,
            lines,
            steps,
        }
    }

    fn run(&self, state: &mut SolverState<'_>) -> Result<SolveStatus, Contradiction> {
        if let Some(lines) = self.start_from {
            assert_eq!(lines.len(), self.puzzle.grid().num_edges());
            for (e, &line) in lines.iter().enumerate() {
                if line.is_known() {
                    state.set_line(e, line, Rule::Given)?;
                }
            }
        }
        let mut i = 0;
        loop {
            let tier = TIERS[i];
            if !tier.enabled(self.difficulty) {
                i += 1;
                continue;
            }
            let progress = match tier {
                Tier::Easy => trivial_deductions(state)?,
                Tier::Normal => dline_deductions(state, self.difficulty)?,
                Tier::Hard => linedsf_deductions(state)?,
                Tier::LoopClosure => match loop_deductions(state)? {
                    LoopOutcome::Solved => return finish(state, SolveStatus::Solved),
                    LoopOutcome::Ambiguous => return finish(state, SolveStatus::Ambiguous),
                    LoopOutcome::Progress => true,
                    LoopOutcome::Stalled => return Ok(SolveStatus::Incomplete),
                },
            };
            if progress {
                trace!("progress from {:?} tier", tier);
                i = 0;
            } else {
                i += 1;
            }
        }
    }
}

/// Every line not on the loop is not a line
fn finish(state: &mut SolverState<'_>, status: SolveStatus) -> Result<SolveStatus, Contradiction> {
    state.set_remaining(LineState::No, Rule::Remainder)?;
    Ok(status)
}

/// Returns true if the solver can prove the puzzle has exactly one solution
pub fn has_unique_solution(puzzle: &Puzzle, difficulty: Difficulty) -> bool {
    PuzzleSolver::new(puzzle)
        .difficulty(difficulty)
        .solve()
        .is_solved()
}

/// The easiest difficulty at which the puzzle can be solved
pub fn grade(puzzle: &Puzzle) -> Option<Difficulty> {
    Difficulty::ALL
        .iter()
        .copied()
        .find(|&difficulty| has_unique_solution(puzzle, difficulty))
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::grid::Grid;
    use crate::puzzle::{LineState, Puzzle};
    use crate::solve::{grade, Difficulty, PuzzleSolver, SolveStatus};

    fn square_puzzle(width: usize, height: usize, clues: &[Option<usize>]) -> Puzzle {
        Puzzle::new(Arc::new(Grid::square(width, height).unwrap()), clues.to_vec()).unwrap()
    }

    #[test]
    fn parse_difficulty() {
        assert_eq!("tricky".parse::<Difficulty>(), Ok(Difficulty::Tricky));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        for &d in &Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn easy_solve() {
        let puzzle = square_puzzle(2, 2, &[Some(4), Some(1), Some(1), Some(0)]);
        let result = PuzzleSolver::new(&puzzle)
            .difficulty(Difficulty::Easy)
            .save_steps()
            .solve();
        assert_eq!(result.status(), SolveStatus::Solved);
        let face = puzzle.grid().face(0).edges();
        for (e, &line) in result.lines().iter().enumerate() {
            let expected = if face.contains(&e) {
                LineState::Yes
            } else {
                LineState::No
            };
            assert_eq!(line, expected);
        }
        assert_eq!(result.steps().len(), puzzle.grid().num_edges());
        assert_eq!(grade(&puzzle), Some(Difficulty::Easy));
    }

    #[test]
    fn mistake() {
        let puzzle = square_puzzle(2, 1, &[Some(4), Some(0)]);
        for &d in &Difficulty::ALL {
            let result = PuzzleSolver::new(&puzzle).difficulty(d).solve();
            assert_eq!(result.status(), SolveStatus::Mistake);
        }
        assert_eq!(grade(&puzzle), None);
    }

    #[test]
    fn lone_square_with_one_line() {
        // the only loop has four lines, so ruling out the others leaves no line at all
        let puzzle = square_puzzle(1, 1, &[Some(1)]);
        let result = PuzzleSolver::new(&puzzle).difficulty(Difficulty::Easy).solve();
        assert_eq!(result.status(), SolveStatus::Incomplete);
        for &d in &Difficulty::ALL[1..] {
            let result = PuzzleSolver::new(&puzzle).difficulty(d).solve();
            assert_eq!(result.status(), SolveStatus::Mistake, "{}", d);
        }
        assert_eq!(grade(&puzzle), None);
    }

    #[test]
    fn face_filled_against_clue() {
        let puzzle = square_puzzle(1, 1, &[Some(1)]);
        let lines = vec![LineState::No; 4];
        let result = PuzzleSolver::new(&puzzle)
            .difficulty(Difficulty::Easy)
            .start_from(&lines)
            .solve();
        assert_eq!(result.status(), SolveStatus::Mistake);
    }

    #[test]
    #[should_panic]
    fn start_from_wrong_length() {
        let puzzle = square_puzzle(1, 1, &[None]);
        let lines = vec![LineState::Unknown; 3];
        PuzzleSolver::new(&puzzle).start_from(&lines).solve();
    }

    #[test]
    fn no_clues() {
        let puzzle = square_puzzle(2, 2, &[None; 4]);
        for &d in &Difficulty::ALL {
            let result = PuzzleSolver::new(&puzzle).difficulty(d).solve();
            assert_eq!(result.status(), SolveStatus::Incomplete);
        }
    }

    #[test]
    fn all_twos_stall() {
        // the outer boundary is the only solution but no deduction applies
        let puzzle = square_puzzle(2, 2, &[Some(2); 4]);
        for &d in &Difficulty::ALL {
            let result = PuzzleSolver::new(&puzzle).difficulty(d).solve();
            assert_eq!(result.status(), SolveStatus::Incomplete);
        }
    }

    #[test]
    fn two_loops_not_solved() {
        let puzzle = square_puzzle(3, 1, &[None, Some(1), None]);
        let result = PuzzleSolver::new(&puzzle).solve();
        assert_ne!(result.status(), SolveStatus::Solved);
    }

    #[test]
    fn start_from_lines() {
        let puzzle = square_puzzle(2, 1, &[None, None]);
        let mut lines = vec![LineState::Unknown; puzzle.grid().num_edges()];
        for &e in puzzle.grid().face(1).edges() {
            lines[e] = LineState::Yes;
        }
        let result = PuzzleSolver::new(&puzzle).start_from(&lines).solve();
        assert_eq!(result.status(), SolveStatus::Solved);
        assert!(puzzle.verify_solution(result.lines()));

        // a dot with three lines
        let left = puzzle.grid().face(0).edges();
        lines[left[0]] = LineState::Yes;
        let result = PuzzleSolver::new(&puzzle).start_from(&lines).solve();
        assert_eq!(result.status(), SolveStatus::Mistake);
    }
}
