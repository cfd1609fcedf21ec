//! Planar polygon primitives used by the classifier and the deduplicator.
//!
//! Vertices are integer pixel coordinates; polygons are closed implicitly,
//! so the last vertex is never a repeat of the first. Areas and
//! intersections are computed with `geo`.

use geo::{Area, BooleanOps, Coord, LineString, Polygon};
use imageproc::point::Point;

/// Perimeter of a closed curve.
pub fn arc_length(curve: &[Point<i32>]) -> f64 {
    if curve.len() < 2 {
        return 0.0;
    }
    imageproc::geometry::arc_length(curve, true)
}

/// Exterior ring of `points` as a `geo` polygon. The ring is closed by
/// `geo` itself.
pub fn to_geo(points: &[Point<i32>]) -> Polygon<f64> {
    let ring: LineString<f64> = points
        .iter()
        .map(|p| Coord {
            x: p.x as f64,
            y: p.y as f64,
        })
        .collect();
    Polygon::new(ring, vec![])
}

/// Signed area; positive when the vertices run clockwise on screen
/// (counter-clockwise in y-up coordinates).
pub fn signed_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    to_geo(points).signed_area()
}

/// Absolute enclosed area.
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    signed_area(points).abs()
}

/// True when every turn between consecutive edges has the same direction.
///
/// Collinear vertices are tolerated; a polygon with no turn at all is not
/// convex.
pub fn is_convex(points: &[Point<i32>]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut orientation = 0i64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        let cross = (b.x - a.x) as i64 * (c.y - b.y) as i64 - (b.y - a.y) as i64 * (c.x - b.x) as i64;
        if cross == 0 {
            continue;
        }
        if orientation == 0 {
            orientation = cross.signum();
        } else if cross.signum() != orientation {
            return false;
        }
    }

    orientation != 0
}

/// Absolute cosine of the angle at `corner` between the edges towards
/// `from` and `to`.
///
/// A zero-length edge has no defined angle and reports 1.0, the least
/// right-angled value.
pub fn angle_cosine(from: Point<i32>, corner: Point<i32>, to: Point<i32>) -> f64 {
    let (d1x, d1y) = ((from.x - corner.x) as f64, (from.y - corner.y) as f64);
    let (d2x, d2y) = ((to.x - corner.x) as f64, (to.y - corner.y) as f64);
    let denom = ((d1x * d1x + d1y * d1y) * (d2x * d2x + d2y * d2y)).sqrt();
    if denom == 0.0 {
        return 1.0;
    }
    ((d1x * d2x + d1y * d2y) / denom).abs()
}

/// Largest corner cosine over all vertices of a closed polygon.
pub fn max_corner_cosine(points: &[Point<i32>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 1.0;
    }
    (0..n)
        .map(|i| angle_cosine(points[i], points[(i + 1) % n], points[(i + 2) % n]))
        .fold(0.0, f64::max)
}

/// Area of the intersection of two polygons.
///
/// Degenerate inputs (fewer than three vertices or no area) intersect
/// nothing.
pub fn convex_intersection_area(subject: &[Point<i32>], clip: &[Point<i32>]) -> f64 {
    if polygon_area(subject) <= 0.0 || polygon_area(clip) <= 0.0 {
        return 0.0;
    }
    to_geo(subject).intersection(&to_geo(clip)).unsigned_area()
}

/// Normalised overlap `2·|a ∩ b| / (|a| + |b|)`, in `[0, 1]` for convex
/// inputs.
///
/// Returns 0.0 when both polygons are degenerate, so a zero-area pair never
/// counts as overlapping. The operands are put in a canonical order first,
/// which makes the result exactly symmetric.
pub fn overlap_rate(a: &[Point<i32>], b: &[Point<i32>]) -> f64 {
    let total = polygon_area(a) + polygon_area(b);
    if total <= 0.0 {
        return 0.0;
    }

    let key = |poly: &[Point<i32>]| poly.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>();
    let (subject, clip) = if key(a) <= key(b) { (a, b) } else { (b, a) };
    2.0 * convex_intersection_area(subject, clip) / total
}
