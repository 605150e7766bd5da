use crate::error::InvalidGrid;
use crate::grid::{Grid, GridBuilder, GridShape, Point};

pub(crate) const SQUARE_TILE_SIZE: i32 = 20;
const MAX_SIZE: usize = 1000;

impl Grid {
    /// A grid of `width` by `height` square faces, numbered row by row
    pub fn square(width: usize, height: usize) -> Result<Self, InvalidGrid> {
        validate_size(width, height)?;
        let a = SQUARE_TILE_SIZE;
        let mut builder = GridBuilder::with_shape(GridShape::Square { width, height });
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let (px, py) = (a * x, a * y);
                builder.add_face(&[
                    Point::new(px, py),
                    Point::new(px + a, py),
                    Point::new(px + a, py + a),
                    Point::new(px, py + a),
                ]);
            }
        }
        builder.build()
    }
}

pub(crate) fn validate_size(width: usize, height: usize) -> Result<(), InvalidGrid> {
    if width == 0 || height == 0 {
        return Err(InvalidGrid::new(format!(
            "grid size {}x{} is empty",
            width, height
        )));
    }
    if width > MAX_SIZE || height > MAX_SIZE {
        return Err(InvalidGrid::new(format!(
            "grid size {}x{} is unreasonably large",
            width, height
        )));
    }
    Ok(())
}
