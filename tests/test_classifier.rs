//! Shape classifier: the four acceptance conditions and their bounds.

mod common;

use squarescan::detection::classifier::{self, Rejection};

use common::*;

#[test]
fn test_accepts_reference_quadrilaterals() {
    let params = SquareParams::default();

    // The frame and the three drawn regions all pass.
    for region in reference_regions() {
        let square = classifier::classify(&region, &params);
        assert!(square.is_some(), "{:?} should be accepted", region);

        let square = square.unwrap();
        assert!(square.area() > params.min_area);
        assert!(square.max_cosine() < params.max_cosine);
        assert_eq!(square.polygon(), &region);
        assert_eq!(square.step(), None);
    }
}

#[test]
fn test_rejects_wrong_vertex_count() {
    let params = SquareParams::default();

    let triangle = Polygon::from_coords(&[(0, 0), (100, 0), (0, 100)]);
    assert_eq!(classifier::check(&triangle, &params), Err(Rejection::VertexCount(3)));

    let pentagon = Polygon::from_coords(&[(0, 0), (100, 0), (120, 60), (50, 110), (-20, 60)]);
    assert_eq!(classifier::check(&pentagon, &params), Err(Rejection::VertexCount(5)));
}

#[test]
fn test_area_bound_is_exclusive() {
    let params = SquareParams::default();

    // Exactly 1000 px² is not enough.
    let exact = Polygon::from_coords(&[(0, 0), (40, 0), (40, 25), (0, 25)]);
    assert_eq!(classifier::check(&exact, &params), Err(Rejection::TooSmall(1000.0)));

    let larger = Polygon::from_coords(&[(0, 0), (41, 0), (41, 25), (0, 25)]);
    assert!(classifier::classify(&larger, &params).is_some());
}

#[test]
fn test_rejects_non_convex_quadrilateral() {
    // Dart with area 3000 px²: large enough, but one vertex folds inwards.
    let dart = Polygon::from_coords(&[(0, 0), (100, 50), (0, 100), (40, 50)]);
    assert_eq!(classifier::check(&dart, &SquareParams::default()), Err(Rejection::NotConvex));
}

#[test]
fn test_rejects_slanted_corners() {
    let parallelogram = Polygon::from_coords(&[(0, 0), (100, 0), (130, 60), (30, 60)]);
    match classifier::check(&parallelogram, &SquareParams::default()) {
        Err(Rejection::NotRightAngled(cos)) => assert!((cos - 30.0 / 67.0820393).abs() < 1e-6),
        other => panic!("expected NotRightAngled, got {:?}", other),
    }
}

#[test]
fn test_cosine_bound_is_exclusive_and_tunable() {
    let parallelogram = Polygon::from_coords(&[(0, 0), (100, 0), (130, 60), (30, 60)]);
    let cos = parallelogram.max_cosine();

    let at_bound = SquareParams::default().with_max_cosine(cos);
    assert!(classifier::classify(&parallelogram, &at_bound).is_none());

    let loose = SquareParams::default().with_max_cosine(0.5);
    assert!(classifier::classify(&parallelogram, &loose).is_some());
}

#[test]
fn test_classification_is_idempotent() {
    let params = SquareParams::default();
    let polygons = [
        reference_regions()[1].clone(),
        Polygon::from_coords(&[(0, 0), (100, 0), (130, 60), (30, 60)]),
        Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)]),
    ];

    for polygon in &polygons {
        let first = classifier::check(polygon, &params);
        let second = classifier::check(polygon, &params);
        assert_eq!(first, second);
    }
}

#[test]
fn test_decision_ignores_winding() {
    let params = SquareParams::default();
    for region in reference_regions() {
        let reversed = Polygon::new(region.points().iter().rev().copied().collect());
        assert_eq!(
            classifier::classify(&region, &params).is_some(),
            classifier::classify(&reversed, &params).is_some()
        );
    }
}
