//! Deductions from lines that would close a loop

use crate::error::Contradiction;
use crate::puzzle::LineState;
use crate::solve::state::SolverState;
use crate::solve::Rule;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoopOutcome {
    /// The lines form a single loop satisfying every clue
    Solved,
    /// A line was added to close a loop satisfying every clue, but nothing proves it is the
    /// only solution
    Ambiguous,
    /// Some lines were ruled out because they would close a premature loop
    Progress,
    Stalled,
}

pub(crate) fn loop_deductions(state: &mut SolverState<'_>) -> Result<LoopOutcome, Contradiction> {
    let grid = state.grid();

    let mut edge_count = 0;
    for e in 0..grid.num_edges() {
        if state.line(e) == LineState::Yes {
            state.merge_dots(e);
            edge_count += 1;
        }
    }

    let mut clues = 0;
    let mut satisfied = 0;
    let mut one_short = 0;
    for f in 0..grid.num_faces() {
        if let Some(clue) = state.clue(f) {
            let yes = state.face_yes_count(f);
            if yes == clue {
                satisfied += 1;
            } else if yes + 1 == clue {
                one_short += 1;
            }
            clues += 1;
        }
    }

    let mut shortest = grid.num_dots();
    for d in 0..grid.num_dots() {
        let len = state.chain_len(d);
        if len > 1 {
            shortest = shortest.min(len);
        }
    }

    if satisfied == clues && shortest == edge_count {
        return Ok(LoopOutcome::Solved);
    }

    let mut progress = false;
    for e in 0..grid.num_edges() {
        if state.line(e) != LineState::Unknown {
            continue;
        }
        let edge = grid.edge(e);
        if !state.dots_joined(edge.dot1(), edge.dot2()) {
            continue;
        }
        // the loop this line closes must hold every line and finish every clue
        if state.chain_len(edge.dot1()) == edge_count + 1 {
            let one_short_nearby = edge
                .faces()
                .filter(|&f| match state.clue(f) {
                    Some(clue) => state.face_yes_count(f) + 1 == clue,
                    None => false,
                })
                .count();
            if one_short_nearby == one_short && one_short + satisfied == clues {
                state.set_line(e, LineState::Yes, Rule::LastLine)?;
                return Ok(LoopOutcome::Ambiguous);
            }
        }
        progress |= state.set_line(e, LineState::No, Rule::LoopClosure)?;
    }

    Ok(if progress {
        LoopOutcome::Progress
    } else {
        LoopOutcome::Stalled
    })
}
