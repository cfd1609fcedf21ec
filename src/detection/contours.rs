use image::{GrayImage, imageops};
use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point;

/// Trace every border of the foreground in a binary mask.
///
/// Outer borders and hole borders are returned alike; the nesting
/// information is dropped. Everything outside the mask counts as
/// background, so foreground touching the image edge still has an outer
/// border.
pub fn find_contours(mask: &GrayImage) -> Vec<Vec<Point<i32>>> {
    // The tracer never reports a border along the first or last row or
    // column; a zero frame moves every border inside.
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    imageops::replace(&mut padded, mask, 1, 1);

    imageproc::contours::find_contours::<i32>(&padded)
        .into_iter()
        .map(|contour| {
            contour
                .points
                .into_iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect()
        })
        .collect()
}

/// Douglas-Peucker simplification of a closed curve.
///
/// The curve is cut at two mutually distant points, which are corners of
/// any convex outline, and each open half is simplified on its own. The
/// result keeps the traversal direction and does not repeat its first
/// vertex.
pub fn approximate_closed(curve: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    if curve.len() < 3 || epsilon.is_nan() || epsilon <= 0.0 {
        return curve.to_vec();
    }

    let a = farthest_from(curve, 0);
    let b = farthest_from(curve, a);
    if a == b {
        return vec![curve[a]];
    }
    let (start, end) = (a.min(b), a.max(b));

    let mut polygon = approximate_polygon_dp(&curve[start..=end], epsilon, false);

    let wrap: Vec<Point<i32>> = curve[end..].iter().chain(&curve[..=start]).copied().collect();
    let closing = approximate_polygon_dp(&wrap, epsilon, false);

    // Both halves carry the two cut points; keep one copy of each.
    polygon.pop();
    polygon.extend(closing);
    polygon.pop();
    polygon
}

fn farthest_from(curve: &[Point<i32>], origin: usize) -> usize {
    let o = curve[origin];
    let mut best = origin;
    let mut best_dist = 0i64;
    for (i, p) in curve.iter().enumerate() {
        let dx = (p.x - o.x) as i64;
        let dy = (p.y - o.y) as i64;
        let dist = dx * dx + dy * dy;
        if dist > best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
