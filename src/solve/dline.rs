//! Facts about pairs of adjacent lines
//!
//! A dline is a pair of edges that are adjacent around a dot, read clockwise around the dot
//! (so anticlockwise around the face between them). It is identified by its first edge and
//! the dot, as `2 * edge + 1` if the dot is the edge's `dot1` and `2 * edge` otherwise.

use crate::grid::{DotId, FaceId, Grid};

const AT_LEAST_ONE: u8 = 1;
const AT_MOST_ONE: u8 = 1 << 1;

/// The dline holding `grid.dot(dot).edges()[i]` and the next edge clockwise
pub(crate) fn dline_from_dot(grid: &Grid, dot: DotId, i: usize) -> usize {
    let e = grid.dot(dot).edges()[i];
    dline_index(grid, e, dot)
}

/// The dline of edges `i - 1` and `i` around a face, which meet at the face's dot `i`
pub(crate) fn dline_from_face(grid: &Grid, face: FaceId, i: usize) -> usize {
    let face = grid.face(face);
    dline_index(grid, face.edges()[i], face.dots()[i])
}

fn dline_index(grid: &Grid, edge: usize, dot: DotId) -> usize {
    2 * edge + if grid.edge(edge).dot1() == dot { 1 } else { 0 }
}

/// "at least one" and "at most one" of each dline is a line. Flags are never cleared.
#[derive(Clone, Debug)]
pub(crate) struct DlineFlags {
    flags: Vec<u8>,
}

impl DlineFlags {
    pub fn new(num_edges: usize) -> Self {
        Self {
            flags: vec![0; 2 * num_edges],
        }
    }

    pub fn is_at_least_one(&self, dline: usize) -> bool {
        self.flags[dline] & AT_LEAST_ONE != 0
    }

    pub fn is_at_most_one(&self, dline: usize) -> bool {
        self.flags[dline] & AT_MOST_ONE != 0
    }

    /// Returns true if the flag was not already set
    pub fn set_at_least_one(&mut self, dline: usize) -> bool {
        self.set(dline, AT_LEAST_ONE)
    }

    /// Returns true if the flag was not already set
    pub fn set_at_most_one(&mut self, dline: usize) -> bool {
        self.set(dline, AT_MOST_ONE)
    }

    fn set(&mut self, dline: usize, flag: u8) -> bool {
        if self.flags[dline] & flag != 0 {
            return false;
        }
        trace!("dline {} flag {}", dline, flag);
        self.flags[dline] |= flag;
        true
    }
}

#[cfg(test)]
mod test {
    use crate::grid::Grid;
    use crate::solve::dline::{dline_from_dot, dline_from_face, DlineFlags};

    /// every face dline is also a dot dline holding the same two edges
    fn assert_dlines_agree(grid: &Grid) {
        for (f, face) in grid.faces().iter().enumerate() {
            let n = face.order();
            for i in 0..n {
                let dot = face.dots()[i];
                let edges = grid.dot(dot).edges();
                let k = edges.iter().position(|&e| e == face.edges()[i]).unwrap();
                assert_eq!(edges[(k + 1) % edges.len()], face.edges()[(i + n - 1) % n]);
                assert_eq!(dline_from_face(grid, f, i), dline_from_dot(grid, dot, k));
            }
        }
    }

    #[test]
    fn square_dlines() {
        assert_dlines_agree(&Grid::square(3, 2).unwrap());
    }

    #[test]
    fn honeycomb_dlines() {
        assert_dlines_agree(&Grid::honeycomb(3, 3).unwrap());
    }

    #[test]
    fn dot_dlines_distinct() {
        let grid = Grid::square(2, 2).unwrap();
        let mut all: Vec<_> = (0..grid.num_dots())
            .flat_map(|d| (0..grid.dot(d).order()).map(move |i| (d, i)))
            .map(|(d, i)| dline_from_dot(&grid, d, i))
            .collect();
        let len = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), len);
        assert!(all.iter().all(|&i| i < 2 * grid.num_edges()));
    }

    #[test]
    fn flags() {
        let mut flags = DlineFlags::new(2);
        assert!(flags.set_at_most_one(3));
        assert!(!flags.set_at_most_one(3));
        assert!(flags.is_at_most_one(3));
        assert!(!flags.is_at_least_one(3));
        assert!(flags.set_at_least_one(3));
        assert!(flags.is_at_least_one(3));
    }
}
