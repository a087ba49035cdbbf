//! Strict 2D geometry for convex polygons (vertex representation).
//!
//! Purpose
//! - Provide a single validated convex polygon type (`ConvexPolygon`) plus
//!   the point/line primitives its operations are built from, with
//!   numerically explicit (eps-aware) predicates throughout.
//!
//! Why vertex-ordered
//! - Hull construction fixes one rotational sense (counterclockwise); the
//!   clipping algorithm relies on that sense for half-plane orientation, and
//!   its output preserves it, so clipped results never re-run hull reduction.
//!
//! Code cross-refs: `ConvexPolygon`, `Line`, `Point`, `convex_hull`

pub mod hull;
pub mod polygon;
pub mod rand;

mod error;
mod types;

pub use error::GeomError;
pub use hull::convex_hull;
pub use polygon::ConvexPolygon;
pub use types::{cross, Line, Point, Side, EPS};
