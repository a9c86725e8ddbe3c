//! Vector snapshots and domains from command-line arguments and CSV tables.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use spanregion::{Rect, SpanVector};
use std::path::Path;

/// Parse `x,y` or `x,y,z` into a vector named `v{index}`.
pub fn parse_vec(index: usize, s: &str) -> Result<SpanVector> {
    let xs = parse_floats(s).with_context(|| format!("--vec {s:?}"))?;
    let id = format!("v{index}");
    match xs.as_slice() {
        [x, y] => Ok(SpanVector::plane(id, *x, *y)),
        [x, y, z] => Ok(SpanVector::space(id, *x, *y, *z)),
        _ => bail!("--vec {s:?}: expected 2 or 3 comma-separated numbers"),
    }
}

/// Parse `xmin,xmax,ymin,ymax` into a validated rectangle.
pub fn parse_rect(s: &str) -> Result<Rect> {
    let xs = parse_floats(s).with_context(|| format!("--rect {s:?}"))?;
    let [xmin, xmax, ymin, ymax] = xs.as_slice() else {
        bail!("--rect {s:?}: expected xmin,xmax,ymin,ymax");
    };
    Ok(Rect::new(*xmin, *xmax, *ymin, *ymax)?)
}

fn parse_floats(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<f64>()
                .with_context(|| format!("not a number: {t:?}"))
        })
        .collect()
}

/// Read vectors from a CSV with header columns `x`, `y` and optional `z`.
///
/// Rows become `row0`, `row1`, … in file order. Empty cells are rejected.
pub fn read_csv(path: &Path) -> Result<Vec<SpanVector>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let x = float_column(&df, "x")?;
    let y = float_column(&df, "y")?;
    let z = match df.column("z") {
        Ok(_) => Some(float_column(&df, "z")?),
        Err(_) => None,
    };
    tracing::debug!(rows = df.height(), has_z = z.is_some(), path = %path.display(), "csv vectors");

    let mut out = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let id = format!("row{i}");
        let v = match &z {
            Some(z) => SpanVector::space(id, x[i], y[i], z[i]),
            None => SpanVector::plane(id, x[i], y[i]),
        };
        out.push(v);
    }
    Ok(out)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    let values: Option<Vec<f64>> = series.f64()?.into_iter().collect();
    values.with_context(|| format!("column {name:?} has empty cells"))
}

/// `--vec` values followed by the rows of `--input`, if any.
pub fn collect_vectors(vecs: &[String], input: Option<&Path>) -> Result<Vec<SpanVector>> {
    let mut out = vecs
        .iter()
        .enumerate()
        .map(|(i, s)| parse_vec(i, s))
        .collect::<Result<Vec<_>>>()?;
    if let Some(path) = input {
        out.extend(read_csv(path)?);
    }
    Ok(out)
}
