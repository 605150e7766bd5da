use std::fmt;
use std::fmt::Display;

/// The state of one edge of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineState {
    /// the edge is part of the loop
    Yes,
    /// the edge is not part of the loop
    No,
    Unknown,
}

impl LineState {
    pub fn opposite(self) -> Self {
        match self {
            LineState::Yes => LineState::No,
            LineState::No => LineState::Yes,
            LineState::Unknown => LineState::Unknown,
        }
    }

    pub fn is_known(self) -> bool {
        self != LineState::Unknown
    }

    /// `Yes` for an odd parity, `No` for an even one
    pub(crate) fn from_parity(parity: bool) -> Self {
        if parity {
            LineState::Yes
        } else {
            LineState::No
        }
    }
}

impl Default for LineState {
    fn default() -> Self {
        LineState::Unknown
    }
}

impl Display for LineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LineState::Yes => "yes",
            LineState::No => "no",
            LineState::Unknown => "unknown",
        };
        f.write_str(s)
    }
}
