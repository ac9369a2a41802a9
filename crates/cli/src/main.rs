mod io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hull2d::check::{same_vertex_set, validate_hull};
use hull2d::sample::{draw_cloud, CloudCfg, CloudShape, SampleToken};
use hull2d::{compute, compute_bounding_box, Algorithm, Point};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "hull2d-cli")]
#[command(about = "Planar convex hulls over point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point file
    Hull {
        /// graham, monotone, jarvis or chan
        #[arg(long, default_value_t = Algorithm::default())]
        algo: Algorithm,
        #[arg(long)]
        input: PathBuf,
        /// Output .json or .csv; prints JSON to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Validate the hull against the input before writing it
        #[arg(long)]
        check: bool,
    },
    /// Compute the axis-aligned bounding box of a point file
    Bbox {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a seeded random point cloud
    Generate {
        /// square, disk, circle or line
        #[arg(long, default_value_t = CloudShape::default())]
        shape: CloudShape,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Draw index within the seed
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run every algorithm on a point file and report whether they agree
    Compare {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            algo,
            input,
            out,
            check,
        } => hull(algo, &input, out.as_deref(), check),
        Action::Bbox { input, out } => bbox(&input, out.as_deref()),
        Action::Generate {
            shape,
            count,
            seed,
            index,
            radius,
            out,
        } => generate(
            CloudCfg {
                shape,
                count,
                radius,
            },
            SampleToken::new(seed, index),
            &out,
        ),
        Action::Compare { input } => {
            let report = compare(&input)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

fn emit(points: &[Point<f64>], out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => io::write_points(path, points),
        None => {
            println!("{}", io::to_json(points)?);
            Ok(())
        }
    }
}

fn hull(algo: Algorithm, input: &Path, out: Option<&Path>, check: bool) -> Result<()> {
    let points = io::read_points(input)?;
    let start = Instant::now();
    let hull = compute(algo, &points);
    let elapsed_us = start.elapsed().as_micros() as u64;
    tracing::info!(
        %algo,
        input = %input.display(),
        n = points.len(),
        h = hull.len(),
        elapsed_us,
        "hull"
    );
    if check {
        validate_hull(&points, &hull).with_context(|| format!("{algo} produced an invalid hull"))?;
    }
    emit(&hull, out)
}

fn bbox(input: &Path, out: Option<&Path>) -> Result<()> {
    let points = io::read_points(input)?;
    let corners = compute_bounding_box(&points);
    tracing::info!(input = %input.display(), n = points.len(), "bbox");
    emit(&corners, out)
}

fn generate(cfg: CloudCfg, tok: SampleToken, out: &Path) -> Result<()> {
    let points = draw_cloud(cfg, tok);
    tracing::info!(
        shape = %cfg.shape,
        count = cfg.count,
        radius = cfg.radius,
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        "generate"
    );
    io::write_points(out, &points)
}

#[derive(Debug, Serialize)]
struct AlgoRun {
    algorithm: String,
    vertices: usize,
    elapsed_us: u64,
    valid: bool,
}

#[derive(Debug, Serialize)]
struct CompareReport {
    input: String,
    points: usize,
    agree: bool,
    runs: Vec<AlgoRun>,
}

fn compare(input: &Path) -> Result<CompareReport> {
    let points = io::read_points(input)?;
    let mut hulls = Vec::with_capacity(Algorithm::ALL.len());
    let mut runs = Vec::with_capacity(Algorithm::ALL.len());
    for algo in Algorithm::ALL {
        let start = Instant::now();
        let hull = compute(algo, &points);
        let elapsed_us = start.elapsed().as_micros() as u64;
        let valid = validate_hull(&points, &hull).is_ok();
        runs.push(AlgoRun {
            algorithm: algo.to_string(),
            vertices: hull.len(),
            elapsed_us,
            valid,
        });
        hulls.push(hull);
    }
    let agree = hulls.windows(2).all(|w| same_vertex_set(&w[0], &w[1]));
    tracing::info!(input = %input.display(), n = points.len(), agree, "compare");
    Ok(CompareReport {
        input: input.display().to_string(),
        points: points.len(),
        agree,
        runs,
    })
}
