//! Axis-aligned bounding box as a 4-vertex polygon.

use crate::numeric::Coord;
use crate::point::Point;

/// Number of vertices written by [`bounding_box`] for non-empty input.
pub const BOUNDING_BOX_LEN: usize = 4;

/// Writes the bounding box of `points` counter-clockwise from the bottom-left
/// corner: (min x, min y), (max x, min y), (max x, max y), (min x, max y).
/// Returns 0 for empty input, 4 otherwise. `out` must hold 4 slots.
pub fn bounding_box<T: Coord>(points: &[Point<T>], out: &mut [Point<T>]) -> usize {
    let Some(first) = points.first() else {
        return 0;
    };
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
    for p in &points[1..] {
        if p.x < min_x {
            min_x = p.x;
        }
        if p.x > max_x {
            max_x = p.x;
        }
        if p.y < min_y {
            min_y = p.y;
        }
        if p.y > max_y {
            max_y = p.y;
        }
    }
    out[0] = Point::new(min_x, min_y);
    out[1] = Point::new(max_x, min_y);
    out[2] = Point::new(max_x, max_y);
    out[3] = Point::new(min_x, max_y);
    BOUNDING_BOX_LEN
}
