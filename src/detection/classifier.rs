use crate::detection::params::SquareParams;
use crate::models::{Polygon, Square};

/// Why a polygon is not a square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    VertexCount(usize),
    TooSmall(f64),
    NotConvex,
    NotRightAngled(f64),
}

/// Check a simplified polygon against the square conditions, in order:
/// four vertices, area above `min_area`, convexity, and every corner
/// cosine below `max_cosine`.
pub fn check(polygon: &Polygon, params: &SquareParams) -> Result<Square, Rejection> {
    if polygon.len() != 4 {
        return Err(Rejection::VertexCount(polygon.len()));
    }

    let area = polygon.area();
    if area <= params.min_area {
        return Err(Rejection::TooSmall(area));
    }

    if !polygon.is_convex() {
        return Err(Rejection::NotConvex);
    }

    let max_cosine = polygon.max_cosine();
    if max_cosine >= params.max_cosine {
        return Err(Rejection::NotRightAngled(max_cosine));
    }

    Ok(Square::new(polygon.clone(), area, max_cosine))
}

/// The accepted square, or `None` when any condition fails.
pub fn classify(polygon: &Polygon, params: &SquareParams) -> Option<Square> {
    check(polygon, params).ok()
}
