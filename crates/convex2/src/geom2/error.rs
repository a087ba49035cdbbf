//! Failure kinds reported by hull construction and line operations.

/// Failure modes of polygon construction and line intersection.
///
/// Every operation here is pure and deterministic, so none of these are
/// retryable; each one means the input itself is unusable. There is no
/// partial-failure state: callers get either a well-formed value or one of
/// these.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// Fewer than 3 usable points were supplied, or fewer than 3 survived
    /// convex-hull reduction.
    #[error("a convex polygon requires at least 3 non-collinear vertices")]
    TooFewVertices,
    /// An input point carries non-finite coordinates.
    #[error("point coordinates must be finite")]
    InvalidPoint,
    /// Line intersection was requested for lines whose determinant is below
    /// tolerance (parallel or coincident lines).
    #[error("lines are parallel or coincident")]
    ParallelLines,
}
