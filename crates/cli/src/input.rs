//! Whitespace-separated input: vertex counts first, then coordinate pairs.
//!
//! The format matches the classic stream exchange: for two polygons, two
//! counts `N1 N2` followed by `N1` then `N2` x/y pairs; for one point set, a
//! single count followed by its pairs. Line breaks and extra whitespace are
//! insignificant.

use anyhow::{Context, Result};
use convex2::Point;

/// Parse `N1 N2` followed by `N1 + N2` coordinate pairs.
pub fn parse_two_point_sets(text: &str) -> Result<(Vec<Point>, Vec<Point>)> {
    let mut tokens = text.split_whitespace();
    let n1 = next_count(&mut tokens, "first vertex count")?;
    let n2 = next_count(&mut tokens, "second vertex count")?;
    let first = next_points(&mut tokens, n1, "first")?;
    let second = next_points(&mut tokens, n2, "second")?;
    Ok((first, second))
}

/// Parse `N` followed by `N` coordinate pairs.
pub fn parse_point_set(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let n = next_count(&mut tokens, "vertex count")?;
    next_points(&mut tokens, n, "point")
}

fn next_count<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<usize> {
    let tok = tokens.next().with_context(|| format!("missing {what}"))?;
    tok.parse::<usize>()
        .with_context(|| format!("invalid {what}: {tok:?}"))
}

fn next_points<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    n: usize,
    which: &str,
) -> Result<Vec<Point>> {
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let x = next_coord(tokens, which, i, "x")?;
        let y = next_coord(tokens, which, i, "y")?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

fn next_coord<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    which: &str,
    index: usize,
    axis: &str,
) -> Result<f64> {
    let tok = tokens
        .next()
        .with_context(|| format!("{which} set: missing {axis} of point {index}"))?;
    tok.parse::<f64>()
        .with_context(|| format!("{which} set: invalid coordinate {tok:?}"))
}
