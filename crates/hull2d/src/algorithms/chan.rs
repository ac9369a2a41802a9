//! Chan's algorithm: output-sensitive O(N log H).
//!
//! Model
//! - Guess a hull size `m`, split the input into `r = ⌈N/m⌉` contiguous
//!   groups, hull each group with Graham Scan, then gift-wrap across the
//!   group hulls for at most `m` steps.
//! - If the wrap has not closed after `m` steps the guess was too small; the
//!   driver retries with `m = min(2^(2^t), N)` for `t = 1, 2, 3, ...`.
//!
//! The "too small" outcome is ordinary control flow (`PartialHull::TooSmall`),
//! never an error.

use super::graham::graham_scan;
use super::jarvis::{jarvis_march, max_jarvis_march};
use crate::numeric::Coord;
use crate::point::Point;

/// Outcome of one bounded wrap with hull-size guess `m`.
#[derive(Clone, Debug, PartialEq)]
pub enum PartialHull<T: Coord> {
    /// The wrap closed: the complete hull, counter-clockwise from the
    /// bottommost point.
    Found(Vec<Point<T>>),
    /// `m` steps elapsed without closing; retry with a larger `m`.
    TooSmall,
}

/// Index of the bottommost point (largest x on ties).
fn bottommost_index<T: Coord>(points: &[Point<T>]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if p.y < b.y || (p.y.equals(b.y) && p.x > b.x) {
            best = i;
        }
    }
    best
}

/// One attempt of Chan's algorithm with hull-size guess `m`.
///
/// The input is copied; group hulls are computed on the copy.
pub fn partial_hull<T: Coord>(points: &[Point<T>], m: usize) -> PartialHull<T> {
    let n = points.len();
    if n == 0 {
        return PartialHull::Found(Vec::new());
    }
    if m == 0 {
        return PartialHull::TooSmall;
    }

    let mut work = points.to_vec();
    let lens: Vec<usize> = work.chunks_mut(m).map(graham_scan).collect();
    let sub_hulls: Vec<&[Point<T>]> = work
        .chunks(m)
        .zip(&lens)
        .map(|(group, &len)| &group[..len])
        .collect();
    tracing::trace!(n, m, groups = sub_hulls.len(), "chan partial hull");

    let first = points[bottommost_index(points)];
    let mut point_on_hull = first;
    let mut hull = Vec::with_capacity(m.min(n));
    let mut q = Vec::with_capacity(sub_hulls.len());
    for _ in 0..m {
        hull.push(point_on_hull);
        q.clear();
        q.extend(
            sub_hulls
                .iter()
                .map(|sub| max_jarvis_march(sub, &point_on_hull)),
        );
        let next = max_jarvis_march(&q, &point_on_hull);
        if next.equals(&first) {
            return PartialHull::Found(hull);
        }
        point_on_hull = next;
    }
    PartialHull::TooSmall
}

/// Hull-size guess for round `t`: `min(2^(2^t), n)`, saturating instead of
/// overflowing.
pub fn hull_size_guess(t: u32, n: usize) -> usize {
    1u32.checked_shl(t)
        .and_then(|exp| 1usize.checked_shl(exp))
        .map_or(n, |pow| pow.min(n))
}

/// Chan's algorithm. Returns the hull counter-clockwise from the bottommost
/// point (largest x on ties). The input is not modified.
pub fn chan<T: Coord>(points: &[Point<T>]) -> Vec<Point<T>> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }
    let mut t = 1;
    loop {
        let m = hull_size_guess(t, n);
        match partial_hull(points, m) {
            PartialHull::Found(hull) => {
                tracing::debug!(n, m, rounds = t, hull = hull.len(), "chan closed");
                return hull;
            }
            PartialHull::TooSmall if m >= n => {
                // Only reachable when float tolerance breaks the wrap.
                tracing::warn!(n, "chan did not close with m = n, falling back to jarvis march");
                let mut out = points.to_vec();
                let k = jarvis_march(points, &mut out);
                out.truncate(k);
                return out;
            }
            PartialHull::TooSmall => {
                tracing::debug!(n, m, round = t, "hull size guess too small, retrying");
            }
        }
        t += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Vec<Point<i32>> {
        [
            (13, 5),
            (12, 8),
            (10, 3),
            (7, 7),
            (9, 6),
            (4, 0),
            (7, 1),
            (7, 4),
            (3, 3),
            (1, 1),
        ]
        .into_iter()
        .map(Point::from)
        .collect()
    }

    fn expected() -> Vec<Point<i32>> {
        [(4, 0), (7, 1), (13, 5), (12, 8), (7, 7), (1, 1)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn partial_hull_closes_with_enough_rounds() {
        assert_eq!(partial_hull(&reference(), 6), PartialHull::Found(expected()));
    }

    #[test]
    fn partial_hull_reports_too_small() {
        assert_eq!(partial_hull(&reference(), 5), PartialHull::TooSmall);
        assert_eq!(partial_hull(&reference(), 0), PartialHull::TooSmall);
    }

    #[test]
    fn partial_hull_works_with_tiny_groups() {
        // m = 7 gives groups of 7 and 3 points; the wrap still needs 6 steps.
        assert_eq!(partial_hull(&reference(), 7), PartialHull::Found(expected()));
    }

    #[test]
    fn guess_schedule_is_doubly_exponential_and_capped() {
        assert_eq!(hull_size_guess(1, 1000), 4);
        assert_eq!(hull_size_guess(2, 1000), 16);
        assert_eq!(hull_size_guess(3, 1000), 256);
        assert_eq!(hull_size_guess(4, 1000), 1000);
        assert_eq!(hull_size_guess(6, 1000), 1000);
        assert_eq!(hull_size_guess(40, 7), 7);
    }

    #[test]
    fn chan_retries_until_closed() {
        // t = 1 guesses m = 4 (< 6 hull vertices), t = 2 guesses m = 10.
        assert_eq!(chan(&reference()), expected());
    }

    #[test]
    fn chan_does_not_modify_input() {
        let input = reference();
        chan(&input);
        assert_eq!(input, reference());
    }
}
