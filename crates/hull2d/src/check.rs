//! Hull validation.
//!
//! Purpose
//! - Decide, without trusting any particular algorithm, whether a vertex
//!   sequence is a convex counter-clockwise hull of an input set.
//! - Used by the property tests and by the CLI's `--check` flag.
//!
//! Collinear vertices are tolerated: a hull is accepted when no consecutive
//! triple turns clockwise, every input point lies inside or on the boundary,
//! and every vertex is an input point.

use crate::angle::cross;
use crate::error::HullError;
use crate::numeric::Coord;
use crate::point::Point;

#[inline]
fn turns_clockwise<T: Coord>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> bool {
    let turn = cross(a, b, c);
    turn < T::zero() && !turn.equals(T::zero())
}

/// Index of the first vertex `i` such that `hull[i], hull[i+1], hull[i+2]`
/// (cyclically) turn clockwise, if any.
fn first_clockwise_turn<T: Coord>(hull: &[Point<T>]) -> Option<usize> {
    let h = hull.len();
    if h < 3 {
        return None;
    }
    (0..h).find(|&i| turns_clockwise(&hull[i], &hull[(i + 1) % h], &hull[(i + 2) % h]))
}

/// `true` iff no consecutive vertex triple turns clockwise.
pub fn is_convex_ccw<T: Coord>(hull: &[Point<T>]) -> bool {
    first_clockwise_turn(hull).is_none()
}

/// `true` iff `p` lies inside `hull` or on its boundary.
///
/// Hulls of fewer than three vertices are a point or a segment.
pub fn encloses<T: Coord>(hull: &[Point<T>], p: &Point<T>) -> bool {
    match hull.len() {
        0 => false,
        1 => hull[0].equals(p),
        2 => {
            let (a, b) = (&hull[0], &hull[1]);
            if !cross(a, b, p).equals(T::zero()) {
                return false;
            }
            let within = |lo: T, hi: T, v: T| {
                let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                (lo <= v || lo.equals(v)) && (v <= hi || v.equals(hi))
            };
            within(a.x, b.x, p.x) && within(a.y, b.y, p.y)
        }
        h => (0..h).all(|i| !turns_clockwise(&hull[i], &hull[(i + 1) % h], p)),
    }
}

/// `true` iff every vertex of `hull` equals some point of `input`.
pub fn is_subset_of<T: Coord>(hull: &[Point<T>], input: &[Point<T>]) -> bool {
    hull.iter().all(|v| input.iter().any(|p| p.equals(v)))
}

/// Set equality under numeric `equals`, ignoring order and multiplicity.
pub fn same_vertex_set<T: Coord>(a: &[Point<T>], b: &[Point<T>]) -> bool {
    is_subset_of(a, b) && is_subset_of(b, a)
}

/// Full hull check; reports the first violation found.
pub fn validate_hull<T: Coord>(input: &[Point<T>], hull: &[Point<T>]) -> Result<(), HullError> {
    if let Some(index) = first_clockwise_turn(hull) {
        return Err(HullError::NotConvex { index });
    }
    if let Some(index) = hull.iter().position(|v| !input.iter().any(|p| p.equals(v))) {
        return Err(HullError::UnknownVertex { index });
    }
    if let Some(index) = input.iter().position(|p| !encloses(hull, p)) {
        return Err(HullError::PointOutside { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point<i32>> {
        vec![
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(0, 4),
        ]
    }

    #[test]
    fn ccw_square_is_convex_and_cw_is_not() {
        let mut hull = square();
        assert!(is_convex_ccw(&hull));
        hull.reverse();
        assert!(!is_convex_ccw(&hull));
        assert_eq!(
            validate_hull(&hull.clone(), &hull),
            Err(HullError::NotConvex { index: 0 })
        );
    }

    #[test]
    fn collinear_boundary_vertices_are_tolerated() {
        let hull = vec![
            Point::new(0, 0),
            Point::new(2, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(0, 4),
        ];
        assert!(is_convex_ccw(&hull));
    }

    #[test]
    fn encloses_interior_and_boundary_only() {
        let hull = square();
        assert!(encloses(&hull, &Point::new(2, 2)));
        assert!(encloses(&hull, &Point::new(4, 2)));
        assert!(encloses(&hull, &Point::new(0, 0)));
        assert!(!encloses(&hull, &Point::new(5, 2)));
        assert!(!encloses(&hull, &Point::new(-1, -1)));
    }

    #[test]
    fn degenerate_hulls() {
        let seg = [Point::new(0, 0), Point::new(4, 2)];
        assert!(encloses(&seg, &Point::new(2, 1)));
        assert!(!encloses(&seg, &Point::new(6, 3)));
        assert!(!encloses(&seg, &Point::new(2, 2)));
        let dot = [Point::new(1, 1)];
        assert!(encloses(&dot, &Point::new(1, 1)));
        assert!(!encloses(&dot, &Point::new(1, 2)));
        assert!(!encloses::<i32>(&[], &Point::new(0, 0)));
        assert!(validate_hull::<i32>(&[], &[]).is_ok());
    }

    #[test]
    fn validate_reports_first_violation() {
        let mut input = square();
        input.push(Point::new(2, 1));
        assert_eq!(validate_hull(&input, &square()), Ok(()));

        input.push(Point::new(9, 9));
        assert_eq!(
            validate_hull(&input, &square()),
            Err(HullError::PointOutside { index: 5 })
        );

        let mut hull = square();
        hull[2] = Point::new(5, 5);
        assert_eq!(
            validate_hull(&square(), &hull),
            Err(HullError::UnknownVertex { index: 2 })
        );
    }

    #[test]
    fn vertex_sets_ignore_order_and_duplicates() {
        let a = square();
        let mut b = square();
        b.rotate_left(2);
        b.push(Point::new(0, 0));
        assert!(same_vertex_set(&a, &b));
        assert!(!same_vertex_set(&a, &a[..3]));
        assert!(is_subset_of(&a[..3], &a));
    }
}
