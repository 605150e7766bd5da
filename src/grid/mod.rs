//! Planar subdivisions of the plane into dots, edges and faces
//!
//! A grid is stored as three index arenas. Every face lists its dots clockwise, and edge `k` of
//! a face joins dot `k` to dot `k + 1`. Every dot lists its edges and faces clockwise, and edge
//! `i` of a dot lies between face `i` and face `i + 1`. The unbounded exterior face has no
//! record and shows up as `None`.

pub use self::builder::GridBuilder;

mod builder;
mod honeycomb;
mod square;

pub(crate) use self::square::SQUARE_TILE_SIZE;

pub type DotId = usize;
pub type EdgeId = usize;
pub type FaceId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The tiling a grid was generated from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridShape {
    Square { width: usize, height: usize },
    Honeycomb { width: usize, height: usize },
    /// assembled directly with a `GridBuilder`
    Custom,
}

#[derive(Clone, Debug)]
pub struct Dot {
    point: Point,
    edges: Vec<EdgeId>,
    faces: Vec<Option<FaceId>>,
}

impl Dot {
    pub fn point(&self) -> Point {
        self.point
    }

    /// The number of edges meeting at this dot
    pub fn order(&self) -> usize {
        self.edges.len()
    }

    /// Incident edges in clockwise order
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Incident faces in clockwise order. `faces()[i]` precedes `edges()[i]`.
    pub fn faces(&self) -> &[Option<FaceId>] {
        &self.faces
    }
}

#[derive(Clone, Debug)]
pub struct Edge {
    dot1: DotId,
    dot2: DotId,
    /// the face which walks from `dot1` to `dot2` going clockwise
    face1: FaceId,
    /// the face on the other side, or `None` for the exterior
    face2: Option<FaceId>,
}

impl Edge {
    pub fn dot1(&self) -> DotId {
        self.dot1
    }

    pub fn dot2(&self) -> DotId {
        self.dot2
    }

    pub fn dots(&self) -> [DotId; 2] {
        [self.dot1, self.dot2]
    }

    pub fn face1(&self) -> FaceId {
        self.face1
    }

    pub fn face2(&self) -> Option<FaceId> {
        self.face2
    }

    /// The bounded faces on either side of this edge
    pub fn faces(&self) -> impl Iterator<Item = FaceId> {
        Some(self.face1).into_iter().chain(self.face2)
    }

    /// The face across this edge from `face`
    pub fn other_face(&self, face: FaceId) -> Option<FaceId> {
        if self.face1 == face {
            self.face2
        } else {
            Some(self.face1)
        }
    }
}

#[derive(Clone, Debug)]
pub struct Face {
    dots: Vec<DotId>,
    edges: Vec<EdgeId>,
}

impl Face {
    /// The number of edges around this face
    pub fn order(&self) -> usize {
        self.dots.len()
    }

    pub fn dots(&self) -> &[DotId] {
        &self.dots
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

#[derive(Clone, Debug)]
pub struct Grid {
    shape: GridShape,
    dots: Vec<Dot>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Grid {
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn dot(&self, id: DotId) -> &Dot {
        &self.dots[id]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id]
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn num_dots(&self) -> usize {
        self.dots.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
}
