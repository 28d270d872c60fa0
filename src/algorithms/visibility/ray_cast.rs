use claims::debug_assert_ok;
use log::{debug, warn};
use std::collections::HashSet;

use crate::config::{PointDedup, RayCastConfig};
use crate::data::{Intersection, Point, Ray, RayHit, Segment, VisibilityPolygon};
use crate::RayScalar;

// Visibility by sparse ray casting.
//
// The boundary of the visible region can only change direction where a ray from the
// viewer grazes a segment endpoint. It is therefore enough to shoot rays at the
// endpoints and join the nearest hits in angular order.
//
// A ray aimed exactly at a corner stops at the corner. To find what lies beyond it,
// two more rays are cast a tiny angle (the jitter) to either side:
//
//            . hit beyond the corner (angle + jitter)
//           .
//     x -- a         a: hit at the corner (angle)
//          |.
//          | . hit on the edge (angle - jitter)
//          |
//
// Algorithm overview:
//   1. Collect the endpoints of all segments and drop duplicates.
//   2. For each endpoint, cast unit rays at angle - jitter, angle and angle + jitter.
//   3. Keep the nearest hit of each ray. Rays that hit nothing are dropped; this
//      only happens when the scene is not enclosed by a border.
//   4. Sort the hits by cast angle.
//
// Every ray is tested against every segment: O(endpoints * segments).

/// Visibility polygon of `viewer` with the default [`RayCastConfig`].
///
/// # Examples
///
/// ```rust
/// # use sightline::algorithms::compute_visibility_polygon;
/// # use sightline::data::{Point, Segment};
/// let border = Segment::border(Point::new([0.0f64, 0.0]), Point::new([640.0, 480.0]));
/// let polygon = compute_visibility_polygon(&Point::new([320.0, 240.0]), &border);
/// // Three rays per corner.
/// assert!(polygon.len() <= 12);
/// assert!((polygon.area() - 640.0 * 480.0).abs() < 1.0);
/// ```
pub fn compute_visibility_polygon<T>(
  viewer: &Point<T>,
  segments: &[Segment<T>],
) -> VisibilityPolygon<T>
where
  T: RayScalar,
{
  compute_visibility_polygon_with(viewer, segments, &RayCastConfig::default())
}

/// Visibility polygon of `viewer` among `segments`.
///
/// Returns an empty polygon when there are no segments. The result is fully
/// determined by the inputs: equal inputs give equal outputs.
///
/// `config` must pass [`RayCastConfig::validate`]; a zero dedup cell or jitter
/// gives a meaningless polygon. Debug builds assert this.
pub fn compute_visibility_polygon_with<T>(
  viewer: &Point<T>,
  segments: &[Segment<T>],
  config: &RayCastConfig,
) -> VisibilityPolygon<T>
where
  T: RayScalar,
{
  debug_assert_ok!(config.validate());
  let jitter = T::from_f64(config.jitter);
  let tolerance = T::from_f64(config.parallel_tolerance);
  let corners = unique_endpoints(segments, config.dedup);

  let mut hits = Vec::with_capacity(corners.len() * 3);
  let mut escaped = 0usize;
  for corner in &corners {
    let angle = corner.angle_from(viewer);
    for cast in [angle - jitter, angle, angle + jitter] {
      let ray = Ray::from_angle(*viewer, cast);
      let mut nearest = NearestIntersection::new();
      for segment in segments {
        if let Some(intersection) = ray.intersect_with_tolerance(segment, tolerance) {
          nearest.push(intersection);
        }
      }
      match nearest.take() {
        Some(Intersection { point, param }) => hits.push(RayHit {
          point,
          angle: cast,
          param,
        }),
        None => escaped += 1,
      }
    }
  }
  // Stable: equal angles keep their casting order.
  hits.sort_by_key(|hit| hit.angle.total());

  if escaped > 0 {
    warn!(
      "{} of {} rays hit nothing; the scene is not enclosed",
      escaped,
      corners.len() * 3
    );
  }
  debug!(
    "visibility from ({}, {}): {} segments, {} unique endpoints, {} boundary points",
    viewer[0],
    viewer[1],
    segments.len(),
    corners.len(),
    hits.len()
  );
  VisibilityPolygon::new(*viewer, hits)
}

/// Endpoints of `segments` with duplicates removed, in order of first
/// appearance.
pub fn unique_endpoints<T>(segments: &[Segment<T>], dedup: PointDedup) -> Vec<Point<T>>
where
  T: RayScalar,
{
  let mut seen = HashSet::new();
  let cell = match dedup {
    PointDedup::Exact => None,
    PointDedup::Quantized { cell } => Some(T::from_f64(cell)),
  };
  segments
    .iter()
    .flat_map(|segment| segment.endpoints())
    .filter(|pt| {
      let key = match cell {
        None => [pt[0].total(), pt[1].total()],
        Some(cell) => [(pt[0] / cell).round().total(), (pt[1] / cell).round().total()],
      };
      seen.insert(key)
    })
    .copied()
    .collect()
}

// Container for intersections that only keeps the one nearest to the ray origin.
// Ties keep the earlier intersection.
struct NearestIntersection<T> {
  nearest_intersection: Option<Intersection<T>>,
}

impl<T> NearestIntersection<T>
where
  T: RayScalar,
{
  fn new() -> NearestIntersection<T> {
    NearestIntersection {
      nearest_intersection: None,
    }
  }

  fn push(&mut self, intersection: Intersection<T>) {
    match self.nearest_intersection.as_mut() {
      None => self.nearest_intersection = Some(intersection),
      Some(previous) => {
        if intersection.param < previous.param {
          *previous = intersection;
        }
      }
    }
  }

  fn take(self) -> Option<Intersection<T>> {
    self.nearest_intersection
  }
}
