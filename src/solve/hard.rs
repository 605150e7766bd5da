//! Deductions from lines known to be identical or opposite

use crate::error::Contradiction;
use crate::grid::EdgeId;
use crate::puzzle::LineState;
use crate::solve::dline::dline_from_dot;
use crate::solve::state::SolverState;
use crate::solve::Rule;

/// Returns true if any line, line relation or dline flag was found
pub(crate) fn linedsf_deductions(state: &mut SolverState<'_>) -> Result<bool, Contradiction> {
    let grid = state.grid();
    let mut progress = false;

    for f in 0..grid.num_faces() {
        if state.is_face_solved(f) {
            continue;
        }
        let clue = match state.clue(f) {
            Some(clue) => clue,
            None => continue,
        };
        let order = grid.face(f).order();
        // two identical lines would overshoot the clue, or leave too few to reach it
        if state.face_yes_count(f) + 1 == clue {
            progress |= face_set_identical(state, f, LineState::No)?;
        }
        if state.face_no_count(f) + 1 + clue == order {
            progress |= face_set_identical(state, f, LineState::Yes)?;
        }
        let parity = (clue + state.face_yes_count(f)) % 2 == 1;
        progress |= parity_deductions(state, grid.face(f).edges(), parity)?;
    }

    for d in 0..grid.num_dots() {
        let dot = grid.dot(d);
        let n = dot.order();
        for j in 0..n {
            let (e1, e2) = (dot.edges()[j], dot.edges()[(j + 1) % n]);
            if state.line(e1) != LineState::Unknown || state.line(e2) != LineState::Unknown {
                continue;
            }
            let dline = dline_from_dot(grid, d, j);
            let (root1, inv1) = state.canonify_line(e1);
            let (root2, inv2) = state.canonify_line(e2);
            if root1 == root2 && inv1 != inv2 {
                // opposite lines are exactly one line
                progress |= state.dlines.set_at_most_one(dline);
                progress |= state.dlines.set_at_least_one(dline);
                continue;
            }
            if state.dlines.is_at_most_one(dline) && state.dlines.is_at_least_one(dline) {
                progress |= state.merge_lines(e1, e2, true)?;
            }
        }
        // a dot has zero or two lines
        let parity = state.dot_yes_count(d) % 2 == 1;
        progress |= parity_deductions(state, dot.edges(), parity)?;
    }

    // known lines set their roots, then roots set every line linked to them
    for e in 0..grid.num_edges() {
        let line = state.line(e);
        if line.is_known() {
            let (root, inverse) = state.canonify_line(e);
            progress |= state.set_line(root, linked(line, inverse), Rule::LinkedLine)?;
        }
    }
    for e in 0..grid.num_edges() {
        let (root, inverse) = state.canonify_line(e);
        let line = state.line(root);
        if line.is_known() {
            progress |= state.set_line(e, linked(line, inverse), Rule::LinkedLine)?;
        }
    }

    Ok(progress)
}

fn linked(line: LineState, inverse: bool) -> LineState {
    if inverse {
        line.opposite()
    } else {
        line
    }
}

/// Sets every pair of unknown lines of a face which are known to be identical
fn face_set_identical(
    state: &mut SolverState<'_>,
    f: usize,
    line: LineState,
) -> Result<bool, Contradiction> {
    let edges = state.grid().face(f).edges();
    let mut progress = false;
    for (i, &e1) in edges.iter().enumerate() {
        if state.line(e1) != LineState::Unknown {
            continue;
        }
        for &e2 in &edges[i + 1..] {
            if state.line(e2) != LineState::Unknown {
                continue;
            }
            if state.canonify_line(e1) == state.canonify_line(e2) {
                progress |= state.set_line(e1, line, Rule::IdenticalPair)?;
                progress |= state.set_line(e2, line, Rule::IdenticalPair)?;
            }
        }
    }
    Ok(progress)
}

/// Deductions for a face or dot with two to four unknown lines, where `parity` is whether an
/// odd number of them are lines
pub(crate) fn parity_deductions(
    state: &mut SolverState<'_>,
    edges: &[EdgeId],
    parity: bool,
) -> Result<bool, Contradiction> {
    let unknowns: Vec<EdgeId> = edges
        .iter()
        .copied()
        .filter(|&e| state.line(e) == LineState::Unknown)
        .collect();
    let canonical: Vec<(EdgeId, bool)> =
        unknowns.iter().map(|&e| state.canonify_line(e)).collect();
    let mut progress = false;
    match unknowns.len() {
        2 => {
            progress |= state.merge_lines(unknowns[0], unknowns[1], parity)?;
        }
        3 => {
            // two linked lines fix the third
            for &(a, b, c) in &[(0, 1, 2), (0, 2, 1), (1, 2, 0)] {
                let ((root_a, inv_a), (root_b, inv_b)) = (canonical[a], canonical[b]);
                if root_a == root_b {
                    let line = LineState::from_parity(parity ^ inv_a ^ inv_b);
                    progress |= state.set_line(unknowns[c], line, Rule::Parity)?;
                }
            }
        }
        4 => {
            // two linked lines link the other two
            let pairings = [
                ((0, 1), (2, 3)),
                ((0, 2), (1, 3)),
                ((0, 3), (1, 2)),
                ((1, 2), (0, 3)),
                ((1, 3), (0, 2)),
                ((2, 3), (0, 1)),
            ];
            let linked = pairings
                .iter()
                .find(|((a, b), _)| canonical[*a].0 == canonical[*b].0);
            if let Some(&((a, b), (c, d))) = linked {
                let inverse = parity ^ canonical[a].1 ^ canonical[b].1;
                progress |= state.merge_lines(unknowns[c], unknowns[d], inverse)?;
            }
        }
        _ => {}
    }
    Ok(progress)
}
