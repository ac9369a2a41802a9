//! Planar convex hulls.
//!
//! Four classical algorithms (Graham Scan, Andrew's Monotone Chain, Jarvis
//! March, Chan) plus the axis-aligned bounding box, generic over the
//! coordinate type (`f32`, `f64`, signed integers).
//!
//! Layout
//! - `numeric`, `point`, `angle`: coordinate scalars, the point type and the
//!   orientation/angle predicates every algorithm reduces to.
//! - `algorithms`: the hulls themselves, buffer-based.
//! - `compute`: algorithm selection and the buffer/collection call shapes.
//! - `check`: independent hull validation.
//! - `sample`: seeded point clouds for tests, benches and the CLI.
//!
//! All hulls are counter-clockwise. Coordinates must be finite; NaN or
//! infinite inputs give unspecified (but memory-safe) results.

pub mod algorithms;
pub mod angle;
pub mod check;
pub mod compute;
pub mod error;
pub mod numeric;
pub mod point;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use compute::{compute, compute_bounding_box, compute_into, Algorithm};
pub use error::HullError;
pub use numeric::Coord;
pub use point::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algorithms::{
        bounding_box, chan, graham_scan, jarvis_march, monotone_chain, partial_hull, PartialHull,
    };
    pub use crate::angle::{compare_angles, compare_angles_around, cross};
    pub use crate::check::{same_vertex_set, validate_hull};
    pub use crate::compute::{
        compute, compute_bounding_box, compute_bounding_box_into, compute_into, Algorithm,
    };
    pub use crate::error::HullError;
    pub use crate::numeric::{equals, Coord};
    pub use crate::point::{to_points, Point};
    pub use crate::sample::{draw_cloud, draw_grid_cloud, CloudCfg, CloudShape, SampleToken};
}
