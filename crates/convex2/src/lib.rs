//! Planar convex-polygon geometry: hull construction, clipping, area.
//!
//! The crate builds convex hulls from unordered point sets (Graham scan with
//! tolerance-aware collinearity handling), intersects convex polygons
//! (Sutherland-Hodgman clipping), and measures polygon area (shoelace sum).
//!
//! All operations are pure, synchronous, and bounded by input size. Polygons
//! use value semantics: transforming operations return new instances, and the
//! one in-place operation (`ConvexPolygon::add_vertex`) mutates only its
//! receiver. Program input/output is a caller concern and lives outside this
//! crate.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{convex_hull, ConvexPolygon, GeomError, Line, Point, Side};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{convex_hull, cross, ConvexPolygon, GeomError, Line, Point, Side, EPS};
}
