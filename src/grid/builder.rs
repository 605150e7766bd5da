use ahash::AHashMap;

use crate::error::InvalidGrid;
use crate::grid::{Dot, DotId, Edge, EdgeId, Face, FaceId, Grid, GridShape, Point};

/// Assembles a `Grid` from faces given as clockwise lists of points
#[derive(Debug)]
pub struct GridBuilder {
    shape: GridShape,
    points: Vec<Point>,
    point_ids: AHashMap<Point, DotId>,
    faces: Vec<Vec<DotId>>,
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::with_shape(GridShape::Custom)
    }
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_shape(shape: GridShape) -> Self {
        Self {
            shape,
            points: Vec::new(),
            point_ids: AHashMap::default(),
            faces: Vec::new(),
        }
    }

    /// Adds a dot at `point`, or returns the existing dot at that point
    pub fn add_dot(&mut self, point: Point) -> DotId {
        let points = &mut self.points;
        *self.point_ids.entry(point).or_insert_with(|| {
            points.push(point);
            points.len() - 1
        })
    }

    /// Adds a face bounded by `points`, listed clockwise
    pub fn add_face(&mut self, points: &[Point]) -> FaceId {
        let dots = points.iter().map(|&p| self.add_dot(p)).collect();
        self.faces.push(dots);
        self.faces.len() - 1
    }

    pub fn build(self) -> Result<Grid, InvalidGrid> {
        let GridBuilder {
            shape,
            points,
            faces: face_dots,
            ..
        } = self;
        if face_dots.is_empty() {
            return Err(InvalidGrid::new("grid has no faces".into()));
        }
        for (f, dots) in face_dots.iter().enumerate() {
            if dots.len() < 3 {
                return Err(InvalidGrid::new(format!("face {} has fewer than 3 dots", f)));
            }
            let mut sorted = dots.clone();
            sorted.sort_unstable();
            sorted.dedup();
            if sorted.len() != dots.len() {
                return Err(InvalidGrid::new(format!("face {} repeats a dot", f)));
            }
        }

        let (edges, faces) = build_edges(&face_dots)?;

        let mut incident: Vec<Vec<EdgeId>> = vec![Vec::new(); points.len()];
        for (e, edge) in edges.iter().enumerate() {
            incident[edge.dot1].push(e);
            incident[edge.dot2].push(e);
        }
        if let Some(d) = incident.iter().position(|edges| edges.len() < 2) {
            return Err(InvalidGrid::new(format!("dot {} has fewer than 2 edges", d)));
        }
        // Euler's formula without the exterior face
        if edges.len() + 1 != faces.len() + points.len() {
            return Err(InvalidGrid::new(
                "grid is not a connected planar subdivision".into(),
            ));
        }

        let mut seeds = vec![0; points.len()];
        for (f, face) in faces.iter().enumerate() {
            for &d in &face.dots {
                seeds[d] = f;
            }
        }
        let dots = points
            .iter()
            .enumerate()
            .map(|(d, &point)| {
                let (edges, faces) = arrange_dot(d, seeds[d], &incident[d], &edges, &faces)?;
                Ok(Dot {
                    point,
                    edges,
                    faces,
                })
            })
            .collect::<Result<Vec<_>, InvalidGrid>>()?;

        Ok(Grid {
            shape,
            dots,
            edges,
            faces,
        })
    }
}

/// Creates one edge per pair of consecutive face dots, shared by at most two faces
fn build_edges(face_dots: &[Vec<DotId>]) -> Result<(Vec<Edge>, Vec<Face>), InvalidGrid> {
    let mut edges: Vec<Edge> = Vec::new();
    let mut edge_ids: AHashMap<(DotId, DotId), EdgeId> = AHashMap::default();
    let mut faces = Vec::with_capacity(face_dots.len());
    for (f, dots) in face_dots.iter().enumerate() {
        let n = dots.len();
        let mut face_edges = Vec::with_capacity(n);
        for k in 0..n {
            let (a, b) = (dots[k], dots[(k + 1) % n]);
            let key = (a.min(b), a.max(b));
            let e = match edge_ids.get(&key) {
                Some(&e) => {
                    let edge = &mut edges[e];
                    if edge.face2.is_some() {
                        return Err(InvalidGrid::new(format!(
                            "edge between dots {} and {} borders more than two faces",
                            a, b
                        )));
                    }
                    if edge.dot1 != b {
                        return Err(InvalidGrid::new(format!(
                            "faces {} and {} have opposite orientations",
                            edge.face1, f
                        )));
                    }
                    edge.face2 = Some(f);
                    e
                }
                None => {
                    edges.push(Edge {
                        dot1: a,
                        dot2: b,
                        face1: f,
                        face2: None,
                    });
                    edge_ids.insert(key, edges.len() - 1);
                    edges.len() - 1
                }
            };
            face_edges.push(e);
        }
        faces.push(Face {
            dots: dots.clone(),
            edges: face_edges,
        });
    }
    Ok((edges, faces))
}

/// Orders the edges and faces around dot `d` clockwise, starting from face `seed`.
///
/// Walks clockwise until it wraps around or reaches the exterior face, then walks anticlockwise
/// from the seed to fill in the rest.
fn arrange_dot(
    d: DotId,
    seed: FaceId,
    incident: &[EdgeId],
    edges: &[Edge],
    faces: &[Face],
) -> Result<(Vec<EdgeId>, Vec<Option<FaceId>>), InvalidGrid> {
    let order = incident.len();
    let mut dot_edges: Vec<Option<EdgeId>> = vec![None; order];
    let mut dot_faces: Vec<Option<FaceId>> = vec![None; order];
    let not_a_fan = || InvalidGrid::new(format!("faces around dot {} do not form a fan", d));
    let position = |f: FaceId| {
        faces[f]
            .dots
            .iter()
            .position(|&x| x == d)
            .ok_or_else(not_a_fan)
    };

    dot_faces[0] = Some(seed);
    let mut cw = 0;
    loop {
        let f = dot_faces[cw].ok_or_else(not_a_fan)?;
        let n = faces[f].order();
        let j = position(f)?;
        let e = faces[f].edges[(j + n - 1) % n];
        dot_edges[cw] = Some(e);
        cw += 1;
        if cw == order {
            break;
        }
        dot_faces[cw] = edges[e].other_face(f);
        if dot_faces[cw].is_none() {
            break;
        }
    }
    if cw < order {
        let mut acw = 0;
        loop {
            let f = dot_faces[acw].ok_or_else(not_a_fan)?;
            let j = position(f)?;
            let e = faces[f].edges[j];
            acw = if acw == 0 { order - 1 } else { acw - 1 };
            dot_edges[acw] = Some(e);
            if acw == cw {
                break;
            }
            dot_faces[acw] = edges[e].other_face(f);
            if dot_faces[acw].is_none() {
                return Err(not_a_fan());
            }
        }
    }

    let dot_edges = dot_edges
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(not_a_fan)?;
    let mut sorted = dot_edges.clone();
    sorted.sort_unstable();
    let mut expected = incident.to_vec();
    expected.sort_unstable();
    if sorted != expected {
        return Err(not_a_fan());
    }
    Ok((dot_edges, dot_faces))
}
