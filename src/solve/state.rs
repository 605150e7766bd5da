use crate::collections::{Dsf, FlipDsf};
use crate::error::Contradiction;
use crate::grid::{DotId, EdgeId, FaceId, Grid};
use crate::puzzle::{Clue, LineState, Puzzle};
use crate::solve::dline::DlineFlags;
use crate::solve::{Rule, Step};

/// Everything the solver knows about a puzzle
///
/// Line states are only written through `set_line`, which keeps the per-dot and per-face
/// counts in step with them.
pub(crate) struct SolverState<'a> {
    puzzle: &'a Puzzle,
    lines: Vec<LineState>,
    dot_yes_count: Vec<usize>,
    dot_no_count: Vec<usize>,
    face_yes_count: Vec<usize>,
    face_no_count: Vec<usize>,
    dot_solved: Vec<bool>,
    face_solved: Vec<bool>,
    /// dots joined by lines; the size of a class is the length its path would have as a loop
    dot_dsf: Dsf,
    /// lines known to be identical or opposite
    line_dsf: FlipDsf,
    pub(crate) dlines: DlineFlags,
    steps: Option<Vec<Step>>,
}

impl<'a> SolverState<'a> {
    pub fn new(puzzle: &'a Puzzle, save_steps: bool) -> Self {
        let grid = puzzle.grid();
        Self {
            puzzle,
            lines: vec![LineState::Unknown; grid.num_edges()],
            dot_yes_count: vec![0; grid.num_dots()],
            dot_no_count: vec![0; grid.num_dots()],
            face_yes_count: vec![0; grid.num_faces()],
            face_no_count: vec![0; grid.num_faces()],
            dot_solved: vec![false; grid.num_dots()],
            face_solved: vec![false; grid.num_faces()],
            dot_dsf: Dsf::new(grid.num_dots()),
            line_dsf: FlipDsf::new(grid.num_edges()),
            dlines: DlineFlags::new(grid.num_edges()),
            steps: if save_steps { Some(Vec::new()) } else { None },
        }
    }

    pub fn grid(&self) -> &'a Grid {
        self.puzzle.grid()
    }

    pub fn clue(&self, face: FaceId) -> Option<Clue> {
        self.puzzle.clue(face)
    }

    pub fn line(&self, edge: EdgeId) -> LineState {
        self.lines[edge]
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[LineState] {
        &self.lines
    }

    /// Sets the state of a line, updating the counts of its dots and faces.
    /// Returns false if the line already had that state, and fails if it had the opposite state.
    pub fn set_line(
        &mut self,
        edge: EdgeId,
        state: LineState,
        rule: Rule,
    ) -> Result<bool, Contradiction> {
        debug_assert!(state.is_known());
        let old = self.lines[edge];
        if old == state {
            return Ok(false);
        }
        if old.is_known() {
            trace!("edge {} is {} but {} says {}", edge, old, rule, state);
            return Err(Contradiction);
        }
        self.lines[edge] = state;
        let (dot_count, face_count) = match state {
            LineState::Yes => (&mut self.dot_yes_count, &mut self.face_yes_count),
            _ => (&mut self.dot_no_count, &mut self.face_no_count),
        };
        let e = self.puzzle.grid().edge(edge);
        for &d in &e.dots() {
            dot_count[d] += 1;
        }
        for f in e.faces() {
            face_count[f] += 1;
        }
        trace!("edge {} set to {} ({})", edge, state, rule);
        if let Some(steps) = &mut self.steps {
            steps.push(Step { edge, state, rule });
        }
        debug_assert!(self.counts_consistent_around(edge));
        Ok(true)
    }

    /// Sets every unknown line around a face
    pub fn face_set_unknowns(
        &mut self,
        face: FaceId,
        state: LineState,
        rule: Rule,
    ) -> Result<bool, Contradiction> {
        let mut changed = false;
        for &e in self.grid().face(face).edges() {
            if self.lines[e] == LineState::Unknown {
                changed |= self.set_line(e, state, rule)?;
            }
        }
        Ok(changed)
    }

    /// Sets every unknown line at a dot
    pub fn dot_set_unknowns(
        &mut self,
        dot: DotId,
        state: LineState,
        rule: Rule,
    ) -> Result<bool, Contradiction> {
        let mut changed = false;
        for &e in self.grid().dot(dot).edges() {
            if self.lines[e] == LineState::Unknown {
                changed |= self.set_line(e, state, rule)?;
            }
        }
        Ok(changed)
    }

    /// Sets every line still unknown
    pub fn set_remaining(&mut self, state: LineState, rule: Rule) -> Result<(), Contradiction> {
        for e in 0..self.lines.len() {
            if self.lines[e] == LineState::Unknown {
                self.set_line(e, state, rule)?;
            }
        }
        Ok(())
    }

    pub fn face_yes_count(&self, face: FaceId) -> usize {
        self.face_yes_count[face]
    }

    pub fn face_no_count(&self, face: FaceId) -> usize {
        self.face_no_count[face]
    }

    pub fn face_unknown_count(&self, face: FaceId) -> usize {
        self.grid().face(face).order() - self.face_yes_count[face] - self.face_no_count[face]
    }

    pub fn dot_yes_count(&self, dot: DotId) -> usize {
        self.dot_yes_count[dot]
    }

    pub fn dot_unknown_count(&self, dot: DotId) -> usize {
        self.grid().dot(dot).order() - self.dot_yes_count[dot] - self.dot_no_count[dot]
    }

    pub fn is_face_solved(&self, face: FaceId) -> bool {
        self.face_solved[face]
    }

    pub fn mark_face_solved(&mut self, face: FaceId) {
        self.face_solved[face] = true;
    }

    pub fn is_dot_solved(&self, dot: DotId) -> bool {
        self.dot_solved[dot]
    }

    pub fn mark_dot_solved(&mut self, dot: DotId) {
        self.dot_solved[dot] = true;
    }

    /// Joins the dots of a line. Returns true if they were already joined, meaning the line
    /// closes a loop.
    pub fn merge_dots(&mut self, edge: EdgeId) -> bool {
        let e = self.grid().edge(edge);
        !self.dot_dsf.merge(e.dot1(), e.dot2())
    }

    pub fn dots_joined(&mut self, a: DotId, b: DotId) -> bool {
        self.dot_dsf.same_class(a, b)
    }

    /// The number of dots joined to `dot` by lines
    pub fn chain_len(&mut self, dot: DotId) -> usize {
        self.dot_dsf.size(dot)
    }

    /// Records that two lines are identical, or opposite if `inverse` is true.
    /// Returns true if this is new information.
    pub fn merge_lines(
        &mut self,
        a: EdgeId,
        b: EdgeId,
        inverse: bool,
    ) -> Result<bool, Contradiction> {
        let merged = self.line_dsf.merge(a, b, inverse)?;
        if merged {
            trace!(
                "edges {} and {} are {}",
                a,
                b,
                if inverse { "opposite" } else { "identical" }
            );
        }
        Ok(merged)
    }

    /// The representative line of `edge` and whether `edge` is its opposite
    pub fn canonify_line(&mut self, edge: EdgeId) -> (EdgeId, bool) {
        self.line_dsf.canonify(edge)
    }

    pub fn into_parts(self) -> (Vec<LineState>, Vec<Step>) {
        (self.lines, self.steps.unwrap_or_default())
    }

    fn counts_consistent_around(&self, edge: EdgeId) -> bool {
        let grid = self.grid();
        let e = grid.edge(edge);
        e.dots().iter().all(|&d| self.dot_counts_consistent(d))
            && e.faces().all(|f| self.face_counts_consistent(f))
    }

    fn dot_counts_consistent(&self, dot: DotId) -> bool {
        let edges = self.grid().dot(dot).edges();
        self.count(edges, LineState::Yes) == self.dot_yes_count[dot]
            && self.count(edges, LineState::No) == self.dot_no_count[dot]
    }

    fn face_counts_consistent(&self, face: FaceId) -> bool {
        let edges = self.grid().face(face).edges();
        self.count(edges, LineState::Yes) == self.face_yes_count[face]
            && self.count(edges, LineState::No) == self.face_no_count[face]
    }

    fn count(&self, edges: &[EdgeId], state: LineState) -> usize {
        edges.iter().filter(|&&e| self.lines[e] == state).count()
    }

    /// Checks every count against the line states
    #[cfg(test)]
    pub fn caches_consistent(&self) -> bool {
        (0..self.grid().num_dots()).all(|d| self.dot_counts_consistent(d))
            && (0..self.grid().num_faces()).all(|f| self.face_counts_consistent(f))
    }
}
