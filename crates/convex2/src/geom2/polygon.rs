//! Convex polygons in vertex representation: clipping, area, queries.
//!
//! Purpose
//! - Own an ordered convex vertex loop (the order produced by `convex_hull`)
//!   and build intersection, area, and membership on top of `Line`.
//!
//! Why vertex representation
//! - Clipping and the shoelace sum consume ordered vertices directly; edge
//!   half-planes are derived per operation instead of being stored.

use super::error::GeomError;
use super::hull::convex_hull;
use super::types::{cross, Line, Point, Side};

/// Ordered convex vertex loop.
///
/// Invariants after validated construction:
/// - at least 3 vertices, unique up to tolerance, counterclockwise;
/// - no vertex is a collinear midpoint of its neighbors.
///
/// Clipping output skips re-validation and may be degenerate (fewer than 3
/// vertices, or edge-touching slivers); such polygons have zero area and
/// contain nothing.
#[derive(Clone, Debug, Default)]
pub struct ConvexPolygon {
    vertices: Vec<Point>,
}

impl ConvexPolygon {
    /// Hull-validated construction from an unordered point set.
    pub fn from_points(points: &[Point]) -> Result<Self, GeomError> {
        Ok(Self {
            vertices: convex_hull(points)?,
        })
    }

    /// Wrap vertices that are already convex and correctly ordered.
    ///
    /// No validation runs; the caller vouches for the ordering. Clipping
    /// output uses this, since it is convex and ordered by construction.
    pub fn from_vertices_unchecked(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Read-only vertex snapshot in boundary order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// New polygon re-validated over this vertex set plus `p`.
    pub fn with_vertex(&self, p: Point) -> Result<Self, GeomError> {
        let mut points = self.vertices.clone();
        points.push(p);
        Self::from_points(&points)
    }

    /// In-place convenience wrapper around [`ConvexPolygon::with_vertex`].
    ///
    /// On error the receiver is left unchanged. Not synchronized; callers
    /// sharing a polygon across threads must clone or lock.
    pub fn add_vertex(&mut self, p: Point) -> Result<(), GeomError> {
        *self = self.with_vertex(p)?;
        Ok(())
    }

    /// Sutherland-Hodgman intersection: clip `self` against each edge
    /// half-plane of `other` in turn.
    ///
    /// Never fails for well-formed convex inputs. Disjoint inputs produce the
    /// empty polygon; edge-touching inputs may produce a degenerate one with
    /// zero area. The result is convex and ordered by construction and is
    /// returned without re-running hull reduction.
    pub fn intersection(&self, other: &ConvexPolygon) -> ConvexPolygon {
        let mut working = self.vertices.clone();
        let n = other.vertices.len();
        for i in 0..n {
            if working.is_empty() {
                break;
            }
            let Ok(clip) = Line::from_points(other.vertices[i], other.vertices[(i + 1) % n])
            else {
                continue;
            };
            // The vertex after the edge lies on the interior side of the
            // edge for any convex loop with at least 3 vertices.
            let desired = clip.classify(other.vertices[(i + 2) % n]);
            working = clip_by_halfplane(&working, &clip, desired);
        }
        ConvexPolygon::from_vertices_unchecked(working)
    }

    /// Shoelace area: half the absolute signed sum over the vertex loop.
    ///
    /// Zero for degenerate loops with fewer than 3 vertices.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            sum += cross(self.vertices[i], self.vertices[(i + 1) % n], Point::origin());
        }
        sum.abs() / 2.0
    }

    /// Membership test against every edge half-plane, boundary included.
    ///
    /// Degenerate polygons (fewer than 3 vertices) contain nothing.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        for i in 0..n {
            let Ok(edge) = Line::from_points(self.vertices[i], self.vertices[(i + 1) % n]) else {
                return false;
            };
            let desired = edge.classify(self.vertices[(i + 2) % n]);
            let side = edge.classify(p);
            if side != Side::On && side != desired {
                return false;
            }
        }
        true
    }
}

/// One clip pass: the part of `working` on the `desired` side of `clip`.
///
/// Boundary vertices count as inside. A crossing is appended when an edge
/// leaves or enters the half-plane; a `ParallelLines` failure there means the
/// edge cannot cross the clip line at a single point and contributes nothing.
fn clip_by_halfplane(working: &[Point], clip: &Line, desired: Side) -> Vec<Point> {
    let m = working.len();
    let mut out = Vec::with_capacity(m + 1);
    for j in 0..m {
        let cur = working[j];
        let next = working[(j + 1) % m];
        let mut side_cur = clip.classify(cur);
        let mut side_next = clip.classify(next);
        if side_cur == Side::On {
            side_cur = desired;
        }
        if side_next == Side::On {
            side_next = desired;
        }

        if side_cur == desired && side_next == desired {
            out.push(cur);
        } else if side_cur == desired {
            // Leaving the half-plane: keep the vertex, then the crossing
            // unless it coincides with it.
            out.push(cur);
            if let Some(p) = edge_crossing(cur, next, clip) {
                if !p.eq_eps(cur) {
                    out.push(p);
                }
            }
        } else if side_next == desired {
            // Entering the half-plane: only the crossing survives.
            if let Some(p) = edge_crossing(cur, next, clip) {
                out.push(p);
            }
        }
    }
    out
}

fn edge_crossing(p: Point, q: Point, clip: &Line) -> Option<Point> {
    let edge = Line::from_points(p, q).ok()?;
    clip.intersection(&edge).ok()
}
