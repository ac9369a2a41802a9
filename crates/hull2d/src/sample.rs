//! Deterministic random point clouds.
//!
//! Purpose
//! - Feed the property tests, the benchmarks and the CLI `generate` command
//!   with reproducible inputs of known shape.
//!
//! Model
//! - A replay token `(seed, index)` is mixed into a single `StdRng`, so draw
//!   `index` of a seed can be regenerated without drawing the earlier ones.
//! - `Circle` puts every point on the hull; `Line` makes every point
//!   collinear; `Square` and `Disk` have small hulls relative to `count`.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Shape of the region points are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CloudShape {
    /// Uniform in `[-radius, radius]²`.
    #[default]
    Square,
    /// Uniform in the disk of `radius`.
    Disk,
    /// On the circle of `radius`.
    Circle,
    /// On the segment `y = x / 2`, `x ∈ [-radius, radius]`.
    Line,
}

impl fmt::Display for CloudShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CloudShape::Square => "square",
            CloudShape::Disk => "disk",
            CloudShape::Circle => "circle",
            CloudShape::Line => "line",
        })
    }
}

impl FromStr for CloudShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(CloudShape::Square),
            "disk" => Ok(CloudShape::Disk),
            "circle" => Ok(CloudShape::Circle),
            "line" => Ok(CloudShape::Line),
            other => Err(format!(
                "unknown shape {other:?} (expected square, disk, circle or line)"
            )),
        }
    }
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub shape: CloudShape,
    pub count: usize,
    /// Half extent of the region. Non-positive values fall back to 1.
    pub radius: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            shape: CloudShape::Square,
            count: 100,
            radius: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleToken {
    pub seed: u64,
    pub index: u64,
}

impl SampleToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points of the configured shape.
pub fn draw_cloud(cfg: CloudCfg, tok: SampleToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    let r = if cfg.radius > 0.0 && cfg.radius.is_finite() {
        cfg.radius
    } else {
        1.0
    };
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Square => Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r)),
            CloudShape::Disk => {
                // sqrt keeps the density uniform in area.
                let rho = r * rng.gen::<f64>().sqrt();
                let th = rng.gen::<f64>() * 2.0 * PI;
                Point::new(rho * th.cos(), rho * th.sin())
            }
            CloudShape::Circle => {
                let th = rng.gen::<f64>() * 2.0 * PI;
                Point::new(r * th.cos(), r * th.sin())
            }
            CloudShape::Line => {
                let x = rng.gen_range(-r..=r);
                Point::new(x, x * 0.5)
            }
        })
        .collect()
}

/// Integer points uniform in `[-half_extent, half_extent]²`.
///
/// Small extents force many duplicates and collinear triples.
pub fn draw_grid_cloud(count: usize, half_extent: i64, tok: SampleToken) -> Vec<Point<i64>> {
    let mut rng = tok.to_std_rng();
    let h = half_extent.abs();
    (0..count)
        .map(|_| Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_cloud() {
        let cfg = CloudCfg::default();
        let a = draw_cloud(cfg, SampleToken::new(7, 3));
        let b = draw_cloud(cfg, SampleToken::new(7, 3));
        let c = draw_cloud(cfg, SampleToken::new(7, 4));
        assert_eq!(a.len(), 100);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn shapes_respect_their_region() {
        let tok = SampleToken::new(1, 0);
        let r = 3.0;
        for shape in [CloudShape::Square, CloudShape::Disk, CloudShape::Circle, CloudShape::Line] {
            let cfg = CloudCfg {
                shape,
                count: 200,
                radius: r,
            };
            for p in draw_cloud(cfg, tok) {
                match shape {
                    CloudShape::Square => assert!(p.x.abs() <= r && p.y.abs() <= r),
                    CloudShape::Disk => assert!(p.square_norm() <= r * r + 1e-9),
                    CloudShape::Circle => assert!((p.square_norm().sqrt() - r).abs() < 1e-9),
                    CloudShape::Line => assert_eq!(p.y, p.x * 0.5),
                }
            }
        }
    }

    #[test]
    fn grid_cloud_stays_on_grid() {
        let pts = draw_grid_cloud(500, 2, SampleToken::new(9, 0));
        assert_eq!(pts.len(), 500);
        assert!(pts.iter().all(|p| p.x.abs() <= 2 && p.y.abs() <= 2));
        assert!(draw_grid_cloud(3, 0, SampleToken::default())
            .iter()
            .all(|p| *p == Point::new(0, 0)));
    }

    #[test]
    fn shape_names_parse() {
        for shape in [CloudShape::Square, CloudShape::Disk, CloudShape::Circle, CloudShape::Line] {
            assert_eq!(shape.to_string().parse::<CloudShape>(), Ok(shape));
        }
        assert!("triangle".parse::<CloudShape>().is_err());
    }
}
