// Strategies and helpers for property tests:
//  * points and segments
//  * scenes enclosed by a square border
use crate::data::{Point, Segment, VisibilityPolygon};

use proptest::array::uniform3;
use proptest::collection::vec;
use proptest::prelude::*;

/// Half the side length of the square border used by `enclosed_scene`.
pub const ARENA: f64 = 100.0;

pub fn any_coord() -> impl Strategy<Value = f64> {
  -1000.0..1000.0f64
}

pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (any_coord(), any_coord()).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_segment() -> impl Strategy<Value = Segment<f64>> {
  (any_point(), any_point())
    .prop_filter("degenerate segment", |(a, b)| a != b)
    .prop_map(|(a, b)| Segment::new(a, b))
}

pub fn arena_border() -> Vec<Segment<f64>> {
  Segment::border(Point::new([-ARENA, -ARENA]), Point::new([ARENA, ARENA]))
}

fn triangle() -> impl Strategy<Value = Vec<Segment<f64>>> {
  let inner = ARENA * 0.9;
  uniform3((-inner..inner, -inner..inner))
    .prop_filter_map("degenerate triangle", |corners| {
      let corners = corners.map(|(x, y)| Point::new([x, y]));
      Segment::ring(&corners).ok()
    })
}

/// A viewer strictly inside the arena, the arena border, and a handful of
/// triangular obstacles.
pub fn enclosed_scene() -> impl Strategy<Value = (Point<f64>, Vec<Segment<f64>>)> {
  let inner = ARENA * 0.95;
  let viewer = (-inner..inner, -inner..inner).prop_map(|(x, y)| Point::new([x, y]));
  (viewer, vec(triangle(), 0..5)).prop_map(|(viewer, triangles)| {
    let mut segments = arena_border();
    segments.extend(triangles.into_iter().flatten());
    (viewer, segments)
  })
}

/// Collapse runs of consecutive boundary points closer than `tolerance` into
/// their first point.
pub fn clusters(polygon: &VisibilityPolygon<f64>, tolerance: f64) -> Vec<Point<f64>> {
  let mut out: Vec<Point<f64>> = Vec::new();
  for pt in polygon.points() {
    match out.last() {
      Some(last) if last.euclidean_distance(pt) < tolerance => (),
      _ => out.push(*pt),
    }
  }
  out
}

pub fn assert_points_near(actual: &[Point<f64>], expected: &[Point<f64>], tolerance: f64) {
  assert_eq!(
    actual.len(),
    expected.len(),
    "got {:?}, expected {:?}",
    actual,
    expected
  );
  for (a, e) in actual.iter().zip(expected) {
    assert!(
      a.euclidean_distance(e) < tolerance,
      "got {:?}, expected {:?}",
      actual,
      expected
    );
  }
}
