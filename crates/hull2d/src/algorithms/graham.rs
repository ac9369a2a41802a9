//! Graham Scan: polar-angle presort around the lowest point, then a stack scan.
//!
//! The scan works in place: the hull ends up in the first `M` slots of the
//! input slice and `M` is returned. O(N log N).

use crate::angle::{angle_ordering, cross};
use crate::numeric::Coord;
use crate::point::Point;

/// Index of the lowest point (lowest y, then lowest x).
fn lowest_index<T: Coord>(points: &[Point<T>]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if p.y < b.y || (p.y.equals(b.y) && p.x < b.x) {
            best = i;
        }
    }
    best
}

/// Move the lowest point to slot 0 and sort the rest by polar angle around it.
///
/// Collinear points (same angle) are ordered closer first.
pub fn sort_by_polar_angles<T: Coord>(points: &mut [Point<T>]) {
    if points.len() < 2 {
        return;
    }
    let lowest = lowest_index(points);
    points.swap(0, lowest);
    let origin = points[0];
    points[1..].sort_by(|a, b| angle_ordering(a, b, &origin));
}

/// Stack scan over presorted points; returns the hull size `M`.
///
/// Uses a 1-based view `at(i)` where slot 0 aliases the last point, which acts
/// as the sentinel closing the loop.
fn scan<T: Coord>(points: &mut [Point<T>]) -> usize {
    let n = points.len();
    let at = |i: usize| if i == 0 { n - 1 } else { i - 1 };
    let zero = T::zero();

    let mut m = 1;
    let mut i = 2;
    while i <= n {
        while cross(&points[at(m - 1)], &points[at(m)], &points[at(i)]) <= zero {
            if m > 1 {
                m -= 1;
            } else if i == n {
                // everything so far is collinear with the pivot
                break;
            } else {
                i += 1;
            }
        }
        m += 1;
        points.swap(at(m), at(i));
        i += 1;
    }
    m
}

/// Graham Scan, in place. Returns the hull size `M`; the hull occupies
/// `points[..M]` in counter-clockwise order starting at the pivot.
///
/// Inputs of at most 3 points skip the scan and are returned presorted.
pub fn graham_scan<T: Coord>(points: &mut [Point<T>]) -> usize {
    sort_by_polar_angles(points);
    if points.len() <= 3 {
        return points.len();
    }
    scan(points)
}
