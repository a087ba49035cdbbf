//! Machine-readable output for the `--json` mode.

use convex2::ConvexPolygon;
use serde::Serialize;

/// Polygon summary: boundary vertices in order, plus the enclosed area.
#[derive(Serialize)]
pub struct PolygonReport {
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
}

impl PolygonReport {
    pub fn new(poly: &ConvexPolygon) -> Self {
        Self {
            vertices: poly.vertices().iter().map(|p| [p.x, p.y]).collect(),
            area: poly.area(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convex2::Point;

    #[test]
    fn report_serializes_vertices_and_area() {
        let poly = ConvexPolygon::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 2.0),
        ])
        .unwrap();
        let json = serde_json::to_string(&PolygonReport::new(&poly)).unwrap();
        assert!(json.contains("\"area\":2.0") || json.contains("\"area\":2"));
        assert!(json.contains("\"vertices\""));
    }
}
