//! Deductions from dline flags and from the range of lines possible around a face

use crate::error::Contradiction;
use crate::grid::{DotId, FaceId};
use crate::puzzle::LineState;
use crate::solve::dline::{dline_from_dot, dline_from_face};
use crate::solve::state::SolverState;
use crate::solve::{Difficulty, Rule};

/// Returns true if any line or dline flag was set.
///
/// If the face deductions set a line, the dot deductions are skipped so that the cheaper
/// deductions can run first.
pub(crate) fn dline_deductions(
    state: &mut SolverState<'_>,
    difficulty: Difficulty,
) -> Result<bool, Contradiction> {
    let grid = state.grid();
    let mut lines_set = false;
    let mut flags_set = false;

    for f in 0..grid.num_faces() {
        if state.is_face_solved(f) {
            continue;
        }
        if state.clue(f).is_some() {
            let (lines, flags) = face_range_deductions(state, f)?;
            lines_set |= lines;
            flags_set |= flags;
        }
    }
    if lines_set {
        return Ok(true);
    }

    let tricky = difficulty >= Difficulty::Tricky;
    for d in 0..grid.num_dots() {
        if state.is_dot_solved(d) {
            continue;
        }
        let (lines, flags) = dot_deductions(state, d, tricky)?;
        lines_set |= lines;
        flags_set |= flags;
    }
    Ok(lines_set || flags_set)
}

/// Bounds on the number of lines in every arc of a face.
///
/// `min(j, k)` and `max(j, k)` count the lines from edge `j` up to, but not including, edge
/// `k`, going clockwise.
struct ArcBounds {
    n: usize,
    mins: Vec<isize>,
    maxs: Vec<isize>,
}

impl ArcBounds {
    fn new(state: &SolverState<'_>, f: FaceId) -> Self {
        let grid = state.grid();
        let face = grid.face(f);
        let n = face.order();
        let mut bounds = Self {
            n,
            mins: vec![0; n * n],
            maxs: vec![0; n * n],
        };
        for j in 0..n {
            let k = (j + 1) % n;
            let line1 = state.line(face.edges()[j]);
            let min = (line1 == LineState::Yes) as isize;
            let max = (line1 != LineState::No) as isize;
            bounds.set(j, k, min, max);

            let line2 = state.line(face.edges()[k]);
            let dline = dline_from_face(grid, f, k);
            let lines = [line1, line2];
            let mut max = lines.iter().filter(|&&l| l != LineState::No).count() as isize;
            if max == 2 && state.dlines.is_at_most_one(dline) {
                max = 1;
            }
            let mut min = lines.iter().filter(|&&l| l == LineState::Yes).count() as isize;
            if min == 0 && state.dlines.is_at_least_one(dline) {
                min = 1;
            }
            bounds.set(j, (j + 2) % n, min, max);
        }
        for m in 3..n {
            for j in 0..n {
                let k = (j + m) % n;
                let u = (j + 1) % n;
                let v = (j + 2) % n;
                let max = (bounds.max(j, u) + bounds.max(u, k))
                    .min(bounds.max(j, v) + bounds.max(v, k));
                let min = (bounds.min(j, u) + bounds.min(u, k))
                    .max(bounds.min(j, v) + bounds.min(v, k));
                bounds.set(j, k, min, max);
            }
        }
        bounds
    }

    fn set(&mut self, j: usize, k: usize, min: isize, max: isize) {
        self.mins[j * self.n + k] = min;
        self.maxs[j * self.n + k] = max;
    }

    fn min(&self, j: usize, k: usize) -> isize {
        self.mins[j * self.n + k]
    }

    fn max(&self, j: usize, k: usize) -> isize {
        self.maxs[j * self.n + k]
    }
}

/// Returns whether lines were set and whether dline flags were set
fn face_range_deductions(
    state: &mut SolverState<'_>,
    f: FaceId,
) -> Result<(bool, bool), Contradiction> {
    let clue = match state.clue(f) {
        Some(clue) => clue as isize,
        None => return Ok((false, false)),
    };
    let bounds = ArcBounds::new(state, f);
    let grid = state.grid();
    let face = grid.face(f);
    let n = face.order();
    let mut lines_set = false;
    let mut flags_set = false;

    for j in 0..n {
        let e = face.edges()[j];
        if state.line(e) != LineState::Unknown {
            continue;
        }
        let k = (j + 1) % n;
        // the arc of every other edge
        let (min, max) = (bounds.min(k, j), bounds.max(k, j));
        if min > clue || max < clue - 1 {
            return Err(Contradiction);
        }
        if min == clue {
            lines_set |= state.set_line(e, LineState::No, Rule::FaceRange)?;
        }
        if max == clue - 1 {
            lines_set |= state.set_line(e, LineState::Yes, Rule::FaceRange)?;
        }

        // the dline of edges j and j + 1, against the arc of every other edge
        if state.line(face.edges()[k]) != LineState::Unknown {
            continue;
        }
        let dline = dline_from_face(grid, f, k);
        let rest = (k + 1) % n;
        if bounds.min(rest, j) > clue - 2 {
            flags_set |= state.dlines.set_at_most_one(dline);
        }
        if bounds.max(rest, j) < clue {
            flags_set |= state.dlines.set_at_least_one(dline);
        }
    }
    Ok((lines_set, flags_set))
}

/// Returns whether lines were set and whether dline flags were set
fn dot_deductions(
    state: &mut SolverState<'_>,
    d: DotId,
    tricky: bool,
) -> Result<(bool, bool), Contradiction> {
    let grid = state.grid();
    let dot = grid.dot(d);
    let n = dot.order();
    let yes = state.dot_yes_count(d);
    let unknown = state.dot_unknown_count(d);
    let mut lines_set = false;
    let mut flags_set = false;

    for j in 0..n {
        let k = (j + 1) % n;
        let dline = dline_from_dot(grid, d, j);
        let (e1, e2) = (dot.edges()[j], dot.edges()[k]);
        let (line1, line2) = (state.line(e1), state.line(e2));

        if line1 == LineState::No || line2 == LineState::No {
            flags_set |= state.dlines.set_at_most_one(dline);
        }
        if line1 == LineState::Yes || line2 == LineState::Yes {
            flags_set |= state.dlines.set_at_least_one(dline);
        }
        if state.dlines.is_at_most_one(dline) {
            if line1 == LineState::Yes && line2 == LineState::Unknown {
                lines_set |= state.set_line(e2, LineState::No, Rule::DotPair)?;
            }
            if line2 == LineState::Yes && line1 == LineState::Unknown {
                lines_set |= state.set_line(e1, LineState::No, Rule::DotPair)?;
            }
        }
        if state.dlines.is_at_least_one(dline) {
            if line1 == LineState::No && line2 == LineState::Unknown {
                lines_set |= state.set_line(e2, LineState::Yes, Rule::DotPair)?;
            }
            if line2 == LineState::No && line1 == LineState::Unknown {
                lines_set |= state.set_line(e1, LineState::Yes, Rule::DotPair)?;
            }
        }

        if line1 != LineState::Unknown || line2 != LineState::Unknown {
            continue;
        }
        if yes == 0 && unknown == 2 {
            // the only two unknown lines are identical
            if state.dlines.is_at_most_one(dline) {
                lines_set |= state.set_line(e1, LineState::No, Rule::DotPair)?;
                lines_set |= state.set_line(e2, LineState::No, Rule::DotPair)?;
            }
            if state.dlines.is_at_least_one(dline) {
                lines_set |= state.set_line(e1, LineState::Yes, Rule::DotPair)?;
                lines_set |= state.set_line(e2, LineState::Yes, Rule::DotPair)?;
            }
        }
        if yes == 1 {
            flags_set |= state.dlines.set_at_most_one(dline);
            if unknown == 2 {
                flags_set |= state.dlines.set_at_least_one(dline);
            }
        }

        if tricky && state.dlines.is_at_least_one(dline) {
            // dlines sharing no edge with this one have at most one line
            for opp in (0..n).filter(|&opp| !adjacent(n, j, opp)) {
                flags_set |= state.dlines.set_at_most_one(dline_from_dot(grid, d, opp));
            }
            if yes == 0 && state.dlines.is_at_most_one(dline) {
                // exactly one line in this dline and no others yet
                if unknown == 3 {
                    for opp in (0..n).filter(|&opp| opp != j && opp != k) {
                        let e = dot.edges()[opp];
                        if state.line(e) == LineState::Unknown {
                            lines_set |= state.set_line(e, LineState::Yes, Rule::DotExactlyOne)?;
                        }
                    }
                } else if unknown == 4 {
                    flags_set |= set_opposite_at_least_one(state, d, j);
                }
            }
        }
    }
    Ok((lines_set, flags_set))
}

/// true if the dlines starting at `i` and `j` around a dot of order `n` share an edge
fn adjacent(n: usize, i: usize, j: usize) -> bool {
    let diff = (j + n - i) % n;
    diff == 0 || diff == 1 || diff == n - 1
}

/// With four unknown lines at a dot and exactly one line in the dline at `j`, the other two
/// unknown lines, if adjacent, have exactly one line too
fn set_opposite_at_least_one(state: &mut SolverState<'_>, d: DotId, j: usize) -> bool {
    let grid = state.grid();
    let dot = grid.dot(d);
    let n = dot.order();
    for opp in (0..n).filter(|&opp| !adjacent(n, j, opp)) {
        let (e1, e2) = (dot.edges()[opp], dot.edges()[(opp + 1) % n]);
        if state.line(e1) == LineState::Unknown && state.line(e2) == LineState::Unknown {
            return state.dlines.set_at_least_one(dline_from_dot(grid, d, opp));
        }
    }
    false
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::grid::Grid;
    use crate::puzzle::{LineState, Puzzle};
    use crate::solve::dline::{dline_from_dot, dline_from_face};
    use crate::solve::normal::{adjacent, dline_deductions, face_range_deductions};
    use crate::solve::state::SolverState;
    use crate::solve::{Difficulty, Rule};

    #[test]
    fn adjacent_dlines() {
        assert!(adjacent(4, 0, 3));
        assert!(adjacent(4, 0, 1));
        assert!(adjacent(4, 2, 2));
        assert!(!adjacent(4, 0, 2));
        assert!(!adjacent(5, 1, 3));
        assert!(!adjacent(5, 1, 4));
    }

    #[test]
    fn at_most_one_pair_forces_face() {
        let puzzle = Puzzle::new(Arc::new(Grid::square(1, 1).unwrap()), vec![Some(3)]).unwrap();
        let grid = puzzle.grid();
        let mut state = SolverState::new(&puzzle, false);
        // at most one of edges 0 and 1
        state.dlines.set_at_most_one(dline_from_face(grid, 0, 1));
        assert_eq!(dline_deductions(&mut state, Difficulty::Normal), Ok(true));
        let edges = grid.face(0).edges();
        assert_eq!(state.line(edges[2]), LineState::Yes);
        assert_eq!(state.line(edges[3]), LineState::Yes);
        assert_eq!(state.line(edges[0]), LineState::Unknown);
        assert_eq!(state.line(edges[1]), LineState::Unknown);
    }

    #[test]
    fn face_range_flags() {
        // a clue of 3 leaves room for at most one NO, so every dline has at least one line
        let puzzle = Puzzle::new(Arc::new(Grid::square(1, 1).unwrap()), vec![Some(3)]).unwrap();
        let grid = puzzle.grid();
        let mut state = SolverState::new(&puzzle, false);
        assert_eq!(face_range_deductions(&mut state, 0), Ok((false, true)));
        for i in 0..4 {
            let dline = dline_from_face(grid, 0, i);
            assert!(state.dlines.is_at_least_one(dline));
            assert!(!state.dlines.is_at_most_one(dline));
        }
    }

    #[test]
    fn dot_pair_from_line() {
        let puzzle = Puzzle::without_clues(Arc::new(Grid::square(2, 2).unwrap()));
        let grid = puzzle.grid();
        let mut state = SolverState::new(&puzzle, false);
        // the center dot
        let d = (0..grid.num_dots()).find(|&d| grid.dot(d).order() == 4).unwrap();
        let edges = grid.dot(d).edges().to_vec();
        state.set_line(edges[0], LineState::Yes, Rule::Given).unwrap();
        state.dlines.set_at_most_one(dline_from_dot(grid, d, 0));
        assert_eq!(dline_deductions(&mut state, Difficulty::Normal), Ok(true));
        assert_eq!(state.line(edges[1]), LineState::No);
        // one line at the dot: every dline of two unknowns has at most one line
        assert!(state.dlines.is_at_most_one(dline_from_dot(grid, d, 2)));
        assert!(!state.dlines.is_at_least_one(dline_from_dot(grid, d, 2)));
    }

    #[test]
    fn exactly_one_at_empty_dot() {
        let puzzle = Puzzle::without_clues(Arc::new(Grid::square(2, 2).unwrap()));
        let grid = puzzle.grid();
        let mut state = SolverState::new(&puzzle, false);
        let d = (0..grid.num_dots()).find(|&d| grid.dot(d).order() == 4).unwrap();
        let edges = grid.dot(d).edges().to_vec();
        state.set_line(edges[3], LineState::No, Rule::Given).unwrap();
        let dline = dline_from_dot(grid, d, 0);
        state.dlines.set_at_least_one(dline);
        state.dlines.set_at_most_one(dline);

        let mut normal = SolverState::new(&puzzle, false);
        normal.set_line(edges[3], LineState::No, Rule::Given).unwrap();
        normal.dlines.set_at_least_one(dline);
        normal.dlines.set_at_most_one(dline);
        dline_deductions(&mut normal, Difficulty::Normal).unwrap();
        assert_eq!(normal.line(edges[2]), LineState::Unknown);

        dline_deductions(&mut state, Difficulty::Tricky).unwrap();
        assert_eq!(state.line(edges[2]), LineState::Yes);
    }

    #[test]
    fn stable_state_unchanged() {
        let puzzle = Puzzle::parse("square 3 3\n221\n221\n110\n").unwrap();
        for &difficulty in &[Difficulty::Normal, Difficulty::Tricky] {
            let mut state = SolverState::new(&puzzle, false);
            let mut rounds = 0;
            while dline_deductions(&mut state, difficulty).unwrap() {
                rounds += 1;
                assert!(rounds < 100);
            }
            assert!(rounds > 0);
            let lines = state.lines().to_vec();
            assert_eq!(dline_deductions(&mut state, difficulty), Ok(false));
            assert_eq!(state.lines(), &lines[..]);
            assert!(state.caches_consistent());
        }
    }
}
