use crate::error::InvalidGrid;
use crate::grid::square::validate_size;
use crate::grid::{Grid, GridBuilder, GridShape, Point};

// side vector of a hexagon, close to 1:sqrt(3)
const HONEY_A: i32 = 15;
const HONEY_B: i32 = 26;

impl Grid {
    /// A grid of hexagons in `width` columns of `height`, odd columns shifted down by half a
    /// hexagon. Faces are numbered row by row.
    pub fn honeycomb(width: usize, height: usize) -> Result<Self, InvalidGrid> {
        validate_size(width, height)?;
        let (a, b) = (HONEY_A, HONEY_B);
        let mut builder = GridBuilder::with_shape(GridShape::Honeycomb { width, height });
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let cx = 3 * a * x;
                let cy = 2 * b * y + if x % 2 == 1 { b } else { 0 };
                builder.add_face(&[
                    Point::new(cx - a, cy - b),
                    Point::new(cx + a, cy - b),
                    Point::new(cx + 2 * a, cy),
                    Point::new(cx + a, cy + b),
                    Point::new(cx - a, cy + b),
                    Point::new(cx - 2 * a, cy),
                ]);
            }
        }
        builder.build()
    }
}
