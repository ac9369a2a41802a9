//! Errors surfaced by the checked entry points.
//!
//! The hull algorithms themselves are total: degenerate input has a defined
//! output and Chan's "guess too small" is `PartialHull::TooSmall`, not an
//! error. Errors only arise at the buffer-based API boundary, from hull
//! validation, and from parsing an algorithm name.

use std::fmt;

/// Errors surfaced by `compute_into`, `validate_hull` and `Algorithm::from_str`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// The caller-provided output buffer cannot hold the worst-case result.
    OutputTooSmall {
        routine: &'static str,
        needed: usize,
        got: usize,
    },
    /// Three consecutive hull vertices starting at `index` turn clockwise.
    NotConvex { index: usize },
    /// Input point `index` lies strictly outside the hull.
    PointOutside { index: usize },
    /// Hull vertex `index` does not occur in the input.
    UnknownVertex { index: usize },
    /// No algorithm goes by this name.
    UnknownAlgorithm { name: String },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::OutputTooSmall {
                routine,
                needed,
                got,
            } => write!(
                f,
                "{routine} needs an output buffer of {needed} points, got {got}"
            ),
            HullError::NotConvex { index } => {
                write!(f, "hull turns clockwise at vertex {index}")
            }
            HullError::PointOutside { index } => {
                write!(f, "input point {index} lies outside the hull")
            }
            HullError::UnknownVertex { index } => {
                write!(f, "hull vertex {index} is not an input point")
            }
            HullError::UnknownAlgorithm { name } => write!(
                f,
                "unknown algorithm {name:?} (expected graham, monotone, jarvis or chan)"
            ),
        }
    }
}

impl std::error::Error for HullError {}
