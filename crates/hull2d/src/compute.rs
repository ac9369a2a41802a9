//! Algorithm selection and the two call shapes.
//!
//! - Buffer-based: [`compute_into`] works over caller-owned slices, reorders
//!   the input where the algorithm does, and returns the hull length.
//! - Collection-based: [`compute`] copies the input and returns a vector of
//!   exactly the hull size.
//!
//! Both shapes run the same code and agree for the same input order.

use std::fmt;
use std::str::FromStr;

use crate::algorithms::{
    bounding_box, chan, graham_scan, jarvis_march, monotone_chain, BOUNDING_BOX_LEN,
};
use crate::error::HullError;
use crate::numeric::Coord;
use crate::point::Point;

/// Hull algorithm selector. Graham Scan is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    #[default]
    GrahamScan,
    MonotoneChain,
    JarvisMarch,
    Chan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::GrahamScan,
        Algorithm::MonotoneChain,
        Algorithm::JarvisMarch,
        Algorithm::Chan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::GrahamScan => "graham_scan",
            Algorithm::MonotoneChain => "monotone_chain",
            Algorithm::JarvisMarch => "jarvis_march",
            Algorithm::Chan => "chan",
        }
    }

    /// Output slots [`compute_into`] needs for `n` input points.
    pub fn required_output_len(self, n: usize) -> usize {
        match self {
            Algorithm::MonotoneChain => 2 * n,
            Algorithm::GrahamScan | Algorithm::JarvisMarch | Algorithm::Chan => n,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "graham" | "graham_scan" => Ok(Algorithm::GrahamScan),
            "monotone" | "monotone_chain" => Ok(Algorithm::MonotoneChain),
            "jarvis" | "jarvis_march" | "gift_wrapping" => Ok(Algorithm::JarvisMarch),
            "chan" => Ok(Algorithm::Chan),
            _ => Err(HullError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

/// Unchecked dispatch; `output` is already sized for `algorithm`.
fn dispatch<T: Coord>(
    algorithm: Algorithm,
    input: &mut [Point<T>],
    output: &mut [Point<T>],
) -> usize {
    match algorithm {
        Algorithm::GrahamScan => {
            let m = graham_scan(input);
            output[..m].copy_from_slice(&input[..m]);
            m
        }
        Algorithm::MonotoneChain => monotone_chain(input, output),
        Algorithm::JarvisMarch => jarvis_march(input, output),
        Algorithm::Chan => {
            let hull = chan(input);
            output[..hull.len()].copy_from_slice(&hull);
            hull.len()
        }
    }
}

/// Buffer-based hull computation. Writes the hull into the front of `output`
/// and returns its length.
///
/// Graham Scan and Monotone Chain reorder `input`. Fails when `output` is
/// shorter than [`Algorithm::required_output_len`].
pub fn compute_into<T: Coord>(
    algorithm: Algorithm,
    input: &mut [Point<T>],
    output: &mut [Point<T>],
) -> Result<usize, HullError> {
    let needed = algorithm.required_output_len(input.len());
    if output.len() < needed {
        return Err(HullError::OutputTooSmall {
            routine: algorithm.name(),
            needed,
            got: output.len(),
        });
    }
    Ok(dispatch(algorithm, input, output))
}

/// Collection-based hull computation. The caller's points are not modified.
pub fn compute<T: Coord>(algorithm: Algorithm, input: &[Point<T>]) -> Vec<Point<T>> {
    let mut work = input.to_vec();
    let mut output = vec![Point::new(T::zero(), T::zero()); algorithm.required_output_len(input.len())];
    let len = dispatch(algorithm, &mut work, &mut output);
    output.truncate(len);
    output
}

/// Buffer-based bounding box; `output` needs 4 slots.
pub fn compute_bounding_box_into<T: Coord>(
    input: &[Point<T>],
    output: &mut [Point<T>],
) -> Result<usize, HullError> {
    if output.len() < BOUNDING_BOX_LEN {
        return Err(HullError::OutputTooSmall {
            routine: "bounding_box",
            needed: BOUNDING_BOX_LEN,
            got: output.len(),
        });
    }
    Ok(bounding_box(input, output))
}

/// Bounding box as a vector: empty for empty input, else 4 corners.
pub fn compute_bounding_box<T: Coord>(input: &[Point<T>]) -> Vec<Point<T>> {
    let mut output = vec![Point::new(T::zero(), T::zero()); BOUNDING_BOX_LEN];
    let len = bounding_box(input, &mut output);
    output.truncate(len);
    output
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

    #[test]
    fn default_is_graham_scan() {
        assert_eq!(Algorithm::default(), Algorithm::GrahamScan);
        let hull = compute(Algorithm::default(), &reference());
        assert_eq!(hull[0], Point::new(4, 0));
        assert_eq!(hull.len(), 6);
    }

    #[test]
    fn parses_names() {
        assert_eq!("graham".parse::<Algorithm>().unwrap(), Algorithm::GrahamScan);
        assert_eq!("Monotone-Chain".parse::<Algorithm>().unwrap(), Algorithm::MonotoneChain);
        assert_eq!("jarvis".parse::<Algorithm>().unwrap(), Algorithm::JarvisMarch);
        assert_eq!(" chan ".parse::<Algorithm>().unwrap(), Algorithm::Chan);
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>().unwrap(), algo);
        }
        assert!(matches!(
            "quickhull".parse::<Algorithm>(),
            Err(HullError::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn both_call_shapes_agree() {
        for algo in Algorithm::ALL {
            let by_collection = compute(algo, &reference());
            let mut input = reference();
            let mut output = vec![Point::new(0, 0); algo.required_output_len(input.len())];
            let len = compute_into(algo, &mut input, &mut output).unwrap();
            assert_eq!(&output[..len], &by_collection[..], "{algo}");
        }
    }

    #[test]
    fn collection_shape_leaves_input_alone() {
        let input = reference();
        compute(Algorithm::MonotoneChain, &input);
        compute(Algorithm::GrahamScan, &input);
        assert_eq!(input, reference());
    }

    #[test]
    fn undersized_output_is_rejected() {
        let mut input = reference();
        let mut output = vec![Point::new(0, 0); 10];
        let err = compute_into(Algorithm::MonotoneChain, &mut input, &mut output).unwrap_err();
        assert_eq!(
            err,
            HullError::OutputTooSmall {
                routine: "monotone_chain",
                needed: 20,
                got: 10
            }
        );
        assert!(err.to_string().contains("20"));
        // Graham fits in n slots.
        assert_eq!(compute_into(Algorithm::GrahamScan, &mut input, &mut output), Ok(6));

        let mut small = [Point::new(0, 0); 3];
        assert!(compute_bounding_box_into(&reference(), &mut small).is_err());
    }

    #[test]
    fn bounding_box_shapes() {
        let expected = vec![
            Point::new(1, 0),
            Point::new(13, 0),
            Point::new(13, 8),
            Point::new(1, 8),
        ];
        assert_eq!(compute_bounding_box(&reference()), expected);
        let mut out = [Point::new(0, 0); 4];
        assert_eq!(compute_bounding_box_into(&reference(), &mut out), Ok(4));
        assert_eq!(out.to_vec(), expected);
        assert!(compute_bounding_box::<i32>(&[]).is_empty());
    }
}
