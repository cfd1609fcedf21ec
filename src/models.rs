use imageproc::point::Point;

use crate::geometry;

/// One (channel, threshold level) pass of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SweepStep {
    pub channel: usize,
    pub level: u8,
}

impl SweepStep {
    pub fn new(channel: usize, level: u8) -> Self {
        Self { channel, level }
    }

    /// Level 0 is served by edge detection instead of a threshold.
    pub fn uses_edges(&self) -> bool {
        self.level == 0
    }
}

/// Closed polygon with integer vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point<i32>>,
}

impl Polygon {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn from_coords(coords: &[(i32, i32)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point<i32>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn area(&self) -> f64 {
        geometry::polygon_area(&self.points)
    }

    pub fn perimeter(&self) -> f64 {
        geometry::arc_length(&self.points)
    }

    pub fn is_convex(&self) -> bool {
        geometry::is_convex(&self.points)
    }

    pub fn max_cosine(&self) -> f64 {
        geometry::max_corner_cosine(&self.points)
    }

    pub fn overlap_rate(&self, other: &Polygon) -> f64 {
        geometry::overlap_rate(&self.points, &other.points)
    }
}

/// A quadrilateral accepted by the shape classifier.
///
/// Only the classifier constructs these, so every instance satisfies the
/// vertex-count, area, convexity and corner-angle conditions it was
/// checked against.
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    polygon: Polygon,
    area: f64,
    max_cosine: f64,
    step: Option<SweepStep>,
}

impl Square {
    pub(crate) fn new(polygon: Polygon, area: f64, max_cosine: f64) -> Self {
        Self {
            polygon,
            area,
            max_cosine,
            step: None,
        }
    }

    pub(crate) fn found_at(mut self, step: SweepStep) -> Self {
        self.step = Some(step);
        self
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn corners(&self) -> [[i32; 2]; 4] {
        let p = self.polygon.points();
        [
            [p[0].x, p[0].y],
            [p[1].x, p[1].y],
            [p[2].x, p[2].y],
            [p[3].x, p[3].y],
        ]
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn max_cosine(&self) -> f64 {
        self.max_cosine
    }

    /// Sweep pass that produced this square, if it came from a detector run.
    pub fn step(&self) -> Option<SweepStep> {
        self.step
    }

    pub fn overlap_rate(&self, other: &Square) -> f64 {
        self.polygon.overlap_rate(&other.polygon)
    }
}

/// Accepted squares for one image, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    squares: Vec<Square>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, square: Square) {
        self.squares.push(square);
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }

    pub fn as_slice(&self) -> &[Square] {
        &self.squares
    }

    pub fn into_vec(self) -> Vec<Square> {
        self.squares
    }

    /// Corner lists without the classification metadata.
    pub fn polygons(&self) -> Vec<Polygon> {
        self.squares.iter().map(|s| s.polygon.clone()).collect()
    }
}

impl IntoIterator for CandidateSet {
    type Item = Square;
    type IntoIter = std::vec::IntoIter<Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}
