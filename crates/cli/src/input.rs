//! Point sources for the CLI: a CSV/Parquet table with `x`, `y` columns, or a
//! reproducible random draw.

use anyhow::{bail, Context, Result};
use hull::api::{draw_points, CloudBounds, CloudReplay, PointCloudCfg, PointCount};
use nalgebra::Point2;
use polars::prelude::*;
use std::path::Path;

/// Where the points come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(String),
    /// `n` points drawn from the square `[lo, hi)²`.
    Random { n: usize, seed: u64, lo: i32, hi: i32 },
}

impl Source {
    pub fn describe(&self) -> String {
        match self {
            Source::File(path) => path.clone(),
            Source::Random { n, seed, lo, hi } => {
                format!("random(n={n}, seed={seed}, box=[{lo},{hi}))")
            }
        }
    }
}

pub fn load_points(source: &Source) -> Result<Vec<Point2<i32>>> {
    match source {
        Source::File(path) => read_table(Path::new(path)),
        Source::Random { n, seed, lo, hi } => {
            if hi <= lo {
                bail!("empty sampling box [{lo},{hi})");
            }
            let cfg = PointCloudCfg {
                count: PointCount::Fixed(*n),
                bounds: CloudBounds::square(*lo, *hi),
            };
            Ok(draw_points(cfg, CloudReplay { seed: *seed, index: 0 }))
        }
    }
}

fn read_table(path: &Path) -> Result<Vec<Point2<i32>>> {
    let mut lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => bail!("unsupported point file {} (expected .csv or .parquet)", path.display()),
    };
    let schema = lf
        .collect_schema()
        .with_context(|| format!("reading schema of {}", path.display()))?;
    for name in ["x", "y"] {
        match schema.get(name) {
            Some(dtype) if dtype.is_integer() => {}
            Some(dtype) => bail!(
                "column {name} in {} has type {dtype}, expected integer coordinates",
                path.display()
            ),
            None => bail!("column {name} missing in {}", path.display()),
        }
    }
    // Integers outside the i32 range fail here instead of turning into nulls.
    let df = lf
        .select([
            col("x").strict_cast(DataType::Int32),
            col("y").strict_cast(DataType::Int32),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "input_points");

    let xs = df.column("x")?.i32()?;
    let ys = df.column("y")?.i32()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => bail!("row {row}: missing coordinate in {}", path.display()),
        })
        .collect()
}
