//! Point files: JSON, CSV and Parquet in, JSON or CSV out.
//!
//! JSON is an array of `{"x": .., "y": ..}` objects. Tabular inputs need
//! numeric `x` and `y` columns; other columns are ignored. Non-finite
//! coordinates are rejected on read.

use anyhow::{bail, Context, Result};
use hull2d::Point;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

impl From<Point<f64>> for Xy {
    fn from(p: Point<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Xy> for Point<f64> {
    fn from(p: Xy) -> Self {
        Point::new(p.x, p.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Csv,
    Parquet,
}

fn format_of(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => Ok(Format::Json),
        Some("csv") => Ok(Format::Csv),
        Some("parquet") => Ok(Format::Parquet),
        _ => bail!(
            "unsupported file type {} (expected .json, .csv or .parquet)",
            path.display()
        ),
    }
}

fn check_finite(points: &[Point<f64>]) -> Result<()> {
    if let Some(i) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        bail!("point {i} has a non-finite coordinate: {:?}", points[i]);
    }
    Ok(())
}

fn points_from_frame(lf: LazyFrame) -> Result<Vec<Point<f64>>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .context("table needs numeric x and y columns")?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(i, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {i} has a missing coordinate"),
        })
        .collect()
}

/// Read points from a `.json`, `.csv` or `.parquet` file.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point<f64>>> {
    let path = path.as_ref();
    let points = match format_of(path)? {
        Format::Json => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let raw: Vec<Xy> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            raw.into_iter().map(Point::from).collect()
        }
        Format::Csv => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            points_from_frame(lf).with_context(|| format!("reading {}", path.display()))?
        }
        Format::Parquet => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            points_from_frame(lf).with_context(|| format!("reading {}", path.display()))?
        }
    };
    check_finite(&points).with_context(|| format!("validating {}", path.display()))?;
    Ok(points)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Pretty JSON array of `{"x", "y"}` objects.
pub fn to_json(points: &[Point<f64>]) -> Result<String> {
    let raw: Vec<Xy> = points.iter().copied().map(Xy::from).collect();
    Ok(serde_json::to_string_pretty(&raw)?)
}

/// Write points to a `.json` or `.csv` file, creating parent directories.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point<f64>]) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    match format_of(path)? {
        Format::Json => {
            fs::write(path, to_json(points)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Csv => {
            let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            let mut df = df!("x" => xs, "y" => ys)?;
            let mut file =
                fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Parquet => bail!("parquet output is not supported, use .json or .csv"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<Point<f64>> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(2.5, -1.0),
            Point::new(1.0, 3.0),
        ]
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/points.json");
        write_points(&path, &sample()).unwrap();
        assert_eq!(read_points(&path).unwrap(), sample());
    }

    #[test]
    fn csv_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        write_points(&path, &sample()).unwrap();
        assert_eq!(read_points(&path).unwrap(), sample());
    }

    #[test]
    fn csv_with_integer_and_extra_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grid.csv");
        fs::write(&path, "id,x,y\na,1,2\nb,-3,4\n").unwrap();
        assert_eq!(
            read_points(&path).unwrap(),
            vec![Point::new(1.0, 2.0), Point::new(-3.0, 4.0)]
        );
    }

    #[test]
    fn csv_without_y_column_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,z\n1,2\n").unwrap();
        assert!(read_points(&path).is_err());
    }

    #[test]
    fn non_finite_json_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.json");
        // 1e400 overflows f64 to infinity.
        fs::write(&path, r#"[{"x": 1e400, "y": 0}]"#).unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(format!("{err:#}").contains("non-finite") || format!("{err:#}").contains("parsing"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.txt");
        fs::write(&path, "[]").unwrap();
        assert!(read_points(&path).is_err());
        assert!(write_points(&path, &sample()).is_err());
    }
}
