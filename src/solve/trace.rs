use std::fmt;
use std::fmt::Display;

use crate::grid::EdgeId;
use crate::puzzle::LineState;

/// One line set by the solver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub edge: EdgeId,
    pub state: LineState,
    pub rule: Rule,
}

/// The deduction that set a line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// the line was known before solving
    Given,
    /// a face clue is met, or can only be met with every remaining line
    FaceClue,
    /// a face needs all but one of its remaining lines, and two of them cannot both be lines
    FaceAdjacentPair,
    /// a dot is on the loop or can no longer be
    DotCount,
    /// the lines around a face cannot reach the clue otherwise
    FaceRange,
    /// a pair of lines at a dot has at least one or at most one line
    DotPair,
    /// a dot without lines has a pair with exactly one line
    DotExactlyOne,
    /// two lines of a face are the same and cannot both be set
    IdenticalPair,
    /// the number of lines around a face or dot is odd or even
    Parity,
    /// the line is the same as, or opposite to, a known line
    LinkedLine,
    /// the line would close a loop that is not a solution
    LoopClosure,
    /// the line closes the only loop left
    LastLine,
    /// the line is unused by the finished loop
    Remainder,
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rule::Given => "given",
            Rule::FaceClue => "face clue",
            Rule::FaceAdjacentPair => "face adjacent pair",
            Rule::DotCount => "dot count",
            Rule::FaceRange => "face range",
            Rule::DotPair => "dot pair",
            Rule::DotExactlyOne => "dot exactly one",
            Rule::IdenticalPair => "identical pair",
            Rule::Parity => "parity",
            Rule::LinkedLine => "linked line",
            Rule::LoopClosure => "loop closure",
            Rule::LastLine => "last line",
            Rule::Remainder => "remainder",
        };
        f.write_str(s)
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge {} {} ({})", self.edge, self.state, self.rule)
    }
}
