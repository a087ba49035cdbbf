//! Convex hull construction (Graham scan with tolerance-aware collinearity).
//!
//! Purpose
//! - Reduce an unordered point set to its minimal convex boundary in one
//!   fixed rotational sense (counterclockwise), shared by every polygon
//!   operation downstream.
//!
//! Conventions
//! - The base point is the first point encountered with strictly minimal x.
//!   Ties keep the earliest point, so output ordering is stable under input
//!   order for duplicated minimal-x inputs.
//! - The sweep keeps a vertex only on a strict convex turn (`t < 0` below);
//!   collinear midpoints and duplicate vertices are popped along with reflex
//!   vertices.

use std::cmp::Ordering;

use super::error::GeomError;
use super::types::{cross, Point, EPS};

/// Minimal convex, counterclockwise-ordered hull of `points`.
///
/// Input points need not be distinct or ordered. Fails with `InvalidPoint`
/// when any coordinate is non-finite, and with `TooFewVertices` when fewer
/// than 3 points are supplied or fewer than 3 vertices survive reduction.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, GeomError> {
    if points.iter().any(|p| !p.is_finite()) {
        return Err(GeomError::InvalidPoint);
    }
    if points.len() < 3 {
        return Err(GeomError::TooFewVertices);
    }

    let mut base = points[0];
    for &p in &points[1..] {
        if p.x < base.x {
            base = p;
        }
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|p, q| polar_order(*p, *q, base));

    let mut hull = vec![sorted[0], sorted[1]];
    for &v in &sorted[2..] {
        let mut t = cross(v, hull[hull.len() - 1], hull[hull.len() - 2]);
        if t < 0.0 {
            hull.push(v);
            continue;
        }
        while t >= 0.0 {
            hull.pop();
            if hull.len() == 1 {
                break;
            }
            t = cross(v, hull[hull.len() - 1], hull[hull.len() - 2]);
        }
        hull.push(v);
    }

    if hull.len() < 3 {
        return Err(GeomError::TooFewVertices);
    }
    Ok(hull)
}

/// Polar-angle order around `base`: the base sorts first; points collinear
/// with the base order by ascending squared distance from it.
fn polar_order(p: Point, q: Point, base: Point) -> Ordering {
    match (p.eq_eps(base), q.eq_eps(base)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => {
            let turn = cross(p, q, base);
            if turn.abs() < EPS {
                p.dist2(base)
                    .partial_cmp(&q.dist2(base))
                    .unwrap_or(Ordering::Equal)
            } else if turn > 0.0 {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}
