//! Convex hull construction.
//!
//! Purpose
//! - Four classical hull algorithms over `Point<T>` plus the trivial
//!   axis-aligned bounding box.
//! - Every hull is returned counter-clockwise; only the starting vertex
//!   differs between algorithms:
//!   - Graham Scan: the pivot (lowest y, then lowest x).
//!   - Monotone Chain: the lexicographically smallest point (x, then y).
//!   - Jarvis March: the leftmost point (largest y on ties).
//!   - Chan: the bottommost point (largest x on ties).
//!
//! Input mutation
//! - `graham_scan` and `monotone_chain` reorder their input slice in place.
//!   Callers that need the original order copy first (the collection-based
//!   `compute` in `crate::compute` always does).
//!
//! Degenerate inputs
//! - 0 points → empty, 1 point → that point, all collinear → the two extremes.
//!   Graham Scan returns inputs of at most 3 points in presorted order as-is.

mod bbox;
mod chan;
mod graham;
mod jarvis;
mod monotone;

pub use bbox::{bounding_box, BOUNDING_BOX_LEN};
pub use chan::{chan, hull_size_guess, partial_hull, PartialHull};
pub use graham::{graham_scan, sort_by_polar_angles};
pub use jarvis::{jarvis_march, max_jarvis_march};
pub use monotone::monotone_chain;
