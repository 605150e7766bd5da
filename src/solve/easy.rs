//! Deductions from counting the lines around each face and dot

use crate::error::Contradiction;
use crate::puzzle::LineState;
use crate::solve::state::SolverState;
use crate::solve::Rule;

/// Returns true if any line was set
pub(crate) fn trivial_deductions(state: &mut SolverState<'_>) -> Result<bool, Contradiction> {
    let grid = state.grid();
    let mut progress = false;

    for f in 0..grid.num_faces() {
        if state.is_face_solved(f) {
            continue;
        }
        let order = grid.face(f).order();
        let yes = state.face_yes_count(f);
        let no = state.face_no_count(f);
        let clue = state.clue(f);
        if let Some(clue) = clue {
            if yes > clue || no > order - clue {
                return Err(Contradiction);
            }
        }
        if yes + no == order {
            state.mark_face_solved(f);
            continue;
        }
        let clue = match clue {
            Some(clue) => clue,
            None => continue,
        };

        if yes == clue {
            progress |= state.face_set_unknowns(f, LineState::No, Rule::FaceClue)?;
            state.mark_face_solved(f);
            continue;
        }
        if no == order - clue {
            progress |= state.face_set_unknowns(f, LineState::Yes, Rule::FaceClue)?;
            state.mark_face_solved(f);
            continue;
        }

        if order - clue == no + 1 && state.face_unknown_count(f) > 2 {
            progress |= adjacent_pair_deduction(state, f)?;
        }
    }

    for d in 0..grid.num_dots() {
        if state.is_dot_solved(d) {
            continue;
        }
        let yes = state.dot_yes_count(d);
        let unknown = state.dot_unknown_count(d);
        match (yes, unknown) {
            (0, 0) => state.mark_dot_solved(d),
            (0, 1) => {
                progress |= state.dot_set_unknowns(d, LineState::No, Rule::DotCount)?;
                state.mark_dot_solved(d);
            }
            (1, 0) => return Err(Contradiction),
            (1, 1) => {
                progress |= state.dot_set_unknowns(d, LineState::Yes, Rule::DotCount)?;
            }
            (2, _) => {
                progress |= state.dot_set_unknowns(d, LineState::No, Rule::DotCount)?;
                state.mark_dot_solved(d);
            }
            (0, _) | (1, _) => {}
            _ => return Err(Contradiction),
        }
    }

    Ok(progress)
}

/// A face needs all but one of its unknown lines. If two adjacent unknown lines meet at a dot
/// which already has a line, they cannot both be lines, so every other unknown line is.
fn adjacent_pair_deduction(state: &mut SolverState<'_>, f: usize) -> Result<bool, Contradiction> {
    let grid = state.grid();
    let face = grid.face(f);
    let n = face.order();
    let pair = (0..n).find(|&j| {
        let (e1, e2) = (face.edges()[j], face.edges()[(j + 1) % n]);
        let dot = face.dots()[(j + 1) % n];
        state.line(e1) == LineState::Unknown
            && state.line(e2) == LineState::Unknown
            && state.dot_yes_count(dot) > 0
    });
    let j = match pair {
        Some(j) => j,
        None => return Ok(false),
    };
    let (e1, e2) = (face.edges()[j], face.edges()[(j + 1) % n]);
    let mut progress = false;
    for &e in face.edges() {
        if e != e1 && e != e2 && state.line(e) == LineState::Unknown {
            progress |= state.set_line(e, LineState::Yes, Rule::FaceAdjacentPair)?;
        }
    }
    Ok(progress)
}
