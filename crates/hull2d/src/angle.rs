//! Orientation and polar-angle primitives.
//!
//! Purpose
//! - `cross` is the single predicate every hull algorithm reduces to.
//! - `compare_angles` orders points by polar angle without trigonometry and is
//!   the presort key of Graham Scan.
//! - `get_angle_with_j` / `slow_compare_angles` are the `atan2` reference used
//!   only to cross-check the fast path in tests.
//!
//! Conventions
//! - Angles are measured counter-clockwise from the unit vector j = (1, 0).
//! - `compare_angles` requires both points in the closed upper half-plane
//!   (`y >= 0`). Graham Scan guarantees this by translating to its pivot,
//!   the lowest point. The precondition is only checked in debug builds.

use std::cmp::Ordering;

use crate::numeric::{float_equals, Coord};
use crate::point::Point;

/// Twice the signed area of triangle `p1 p2 p3`.
///
/// - `> 0`: counter-clockwise turn at `p2`
/// - `< 0`: clockwise turn
/// - `= 0`: collinear
#[inline]
pub fn cross<T: Coord>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> T {
    (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}

#[inline]
fn in_upper_half_plane<T: Coord>(p: &Point<T>) -> bool {
    let zero = T::zero();
    p.y >= zero || p.y.equals(zero)
}

/// `true` iff angle(O→p1) < angle(O→p2), O the origin.
///
/// Points with the same angle are ordered by distance to the origin, closer
/// first. Requires `p1.y >= 0 && p2.y >= 0`.
pub fn compare_angles<T: Coord>(p1: &Point<T>, p2: &Point<T>) -> bool {
    debug_assert!(
        in_upper_half_plane(p1) && in_upper_half_plane(p2),
        "compare_angles requires y >= 0, got {p1:?} and {p2:?}"
    );
    let zero = T::zero();
    match (p1.y.equals(zero), p2.y.equals(zero)) {
        (true, true) => {
            // Both on the x-axis: angle 0 (x >= 0) before angle π (x < 0).
            let (neg1, neg2) = (p1.x < zero, p2.x < zero);
            if neg1 != neg2 {
                return neg2;
            }
            p1.square_norm() < p2.square_norm()
        }
        (true, false) => p1.x >= zero,
        (false, true) => p2.x < zero,
        (false, false) => {
            let div1 = -p1.x.to_ratio() / p1.y.to_ratio();
            let div2 = -p2.x.to_ratio() / p2.y.to_ratio();
            if float_equals(div1, div2) {
                p1.square_norm() < p2.square_norm()
            } else {
                div1 < div2
            }
        }
    }
}

/// Same as [`compare_angles`] with angles measured around `origin`.
#[inline]
pub fn compare_angles_around<T: Coord>(p1: &Point<T>, p2: &Point<T>, origin: &Point<T>) -> bool {
    compare_angles(&(*p1 - *origin), &(*p2 - *origin))
}

/// Total-order view of [`compare_angles_around`], suitable for `sort_by`.
#[inline]
pub fn angle_ordering<T: Coord>(p1: &Point<T>, p2: &Point<T>, origin: &Point<T>) -> Ordering {
    if compare_angles_around(p1, p2, origin) {
        Ordering::Less
    } else if compare_angles_around(p2, p1, origin) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Signed angle between j = (1, 0) and O→p, in `[-π, π]`. Uses `atan2`.
#[inline]
pub fn get_angle_with_j<T: Coord>(p: &Point<T>) -> f64 {
    p.y.as_f64().atan2(p.x.as_f64())
}

/// Signed angle between j and origin→p.
#[inline]
pub fn get_angle_with_j_around<T: Coord>(p: &Point<T>, origin: &Point<T>) -> f64 {
    get_angle_with_j(&(*p - *origin))
}

/// Trigonometric reference for [`compare_angles`]; not for production use.
pub fn slow_compare_angles<T: Coord>(p1: &Point<T>, p2: &Point<T>) -> bool {
    let a1 = get_angle_with_j(p1);
    let a2 = get_angle_with_j(p2);
    if float_equals(a1, a2) {
        p1.square_norm() < p2.square_norm()
    } else {
        a1 < a2
    }
}

/// Trigonometric reference for [`compare_angles_around`].
pub fn slow_compare_angles_around<T: Coord>(
    p1: &Point<T>,
    p2: &Point<T>,
    origin: &Point<T>,
) -> bool {
    slow_compare_angles(&(*p1 - *origin), &(*p2 - *origin))
}
