//! Jarvis March (gift wrapping). O(N·H), H the hull size.

use crate::angle::cross;
use crate::numeric::Coord;
use crate::point::Point;

/// Whether `candidate` replaces `endpoint` as the next hull vertex after
/// `origin`: it lies strictly right of origin→endpoint, or on that line and
/// farther from `origin`.
#[inline]
fn supersedes<T: Coord>(origin: &Point<T>, endpoint: &Point<T>, candidate: &Point<T>) -> bool {
    let turn = cross(origin, endpoint, candidate);
    if turn.equals(T::zero()) {
        candidate.square_distance(origin) > endpoint.square_distance(origin)
    } else {
        turn < T::zero()
    }
}

/// The counter-clockwise successor of `point_on_hull` among `candidates`:
/// every candidate ends up on or left of the returned edge, and among
/// collinear candidates the farthest one wins.
///
/// Returns `point_on_hull` itself when no other candidate exists.
pub fn max_jarvis_march<T: Coord>(candidates: &[Point<T>], point_on_hull: &Point<T>) -> Point<T> {
    let mut endpoint = *point_on_hull;
    for sj in candidates {
        if endpoint.equals(point_on_hull) || supersedes(point_on_hull, &endpoint, sj) {
            endpoint = *sj;
        }
    }
    endpoint
}

/// Index of the leftmost point (largest y on ties).
fn leftmost_index<T: Coord>(points: &[Point<T>]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if p.x < b.x || (p.x.equals(b.x) && p.y > b.y) {
            best = i;
        }
    }
    best
}

/// Jarvis March. Writes the hull into `out` starting at the leftmost point
/// and returns its length. The input is not modified.
///
/// `out` must hold at least `points.len()` slots; the wrap never emits more.
pub fn jarvis_march<T: Coord>(points: &[Point<T>], out: &mut [Point<T>]) -> usize {
    let n = points.len();
    if n <= 1 {
        out[..n].copy_from_slice(points);
        return n;
    }

    let mut point_on_hull = points[leftmost_index(points)];
    let mut count = 0;
    loop {
        out[count] = point_on_hull;
        count += 1;
        point_on_hull = max_jarvis_march(points, &point_on_hull);
        if point_on_hull.equals(&out[0]) {
            break;
        }
        if count == n {
            tracing::warn!(n, "gift wrap did not close within n steps");
            break;
        }
    }
    tracing::trace!(n, hull = count, "jarvis march");
    count
}
