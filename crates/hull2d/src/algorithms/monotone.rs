//! Andrew's monotone chain: lexicographic sort, then lower and upper chains.

use std::cmp::Ordering;

use crate::angle::cross;
use crate::numeric::Coord;
use crate::point::Point;

/// x ascending, ties (numeric `equals`) broken by y ascending.
fn lexicographic<T: Coord>(a: &Point<T>, b: &Point<T>) -> Ordering {
    if a.x.equals(b.x) {
        a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal)
    } else {
        a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
    }
}

/// Monotone chain hull. Sorts `points` in place and writes the hull into
/// `out`, returning its length. The hull starts at the smallest point and is
/// counter-clockwise.
///
/// `out` must hold at least `2 * points.len()` slots.
pub fn monotone_chain<T: Coord>(points: &mut [Point<T>], out: &mut [Point<T>]) -> usize {
    points.sort_by(lexicographic);
    let n = points.len();
    if n <= 1 {
        out[..n].copy_from_slice(points);
        return n;
    }
    let zero = T::zero();

    let mut k = 0;
    // lower hull, left to right
    for p in points.iter() {
        while k >= 2 && cross(&out[k - 2], &out[k - 1], p) <= zero {
            k -= 1;
        }
        out[k] = *p;
        k += 1;
    }
    // upper hull, right to left; never pop below the lower chain
    let t = k + 1;
    for p in points[..n - 1].iter().rev() {
        while k >= t && cross(&out[k - 2], &out[k - 1], p) <= zero {
            k -= 1;
        }
        out[k] = *p;
        k += 1;
    }
    // the last point repeats the first
    k - 1
}
