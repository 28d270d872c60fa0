use claims::debug_assert_ok;
use std::fmt::Write;

use super::Point;
use crate::{Error, RayScalar};

/// Nearest obstacle hit of one cast ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<T> {
  pub point: Point<T>,
  /// Angle the ray was cast at, relative to the viewer.
  pub angle: T,
  /// Distance from the viewer along the ray.
  pub param: T,
}

/// Boundary of the region visible from `origin`, ordered by ascending cast
/// angle. The boundary is implicitly closed: the last point connects back to
/// the first.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityPolygon<T> {
  origin: Point<T>,
  hits: Vec<RayHit<T>>,
}

impl<T: RayScalar> VisibilityPolygon<T> {
  /// `hits` must already be sorted by angle.
  pub fn new(origin: Point<T>, hits: Vec<RayHit<T>>) -> VisibilityPolygon<T> {
    let polygon = VisibilityPolygon { origin, hits };
    debug_assert_ok!(polygon.validate());
    polygon
  }

  pub fn empty(origin: Point<T>) -> VisibilityPolygon<T> {
    VisibilityPolygon {
      origin,
      hits: Vec::new(),
    }
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.hits.iter().any(|hit| !hit.point.is_finite()) {
      return Err(Error::NonFiniteCoordinate);
    }
    if self.hits.windows(2).any(|pair| pair[0].angle > pair[1].angle) {
      return Err(Error::UnsortedBoundary);
    }
    Ok(())
  }

  pub fn origin(&self) -> &Point<T> {
    &self.origin
  }

  pub fn hits(&self) -> &[RayHit<T>] {
    &self.hits
  }

  pub fn points(&self) -> impl Iterator<Item = &Point<T>> + '_ {
    self.hits.iter().map(|hit| &hit.point)
  }

  pub fn to_points(&self) -> Vec<Point<T>> {
    self.points().copied().collect()
  }

  pub fn len(&self) -> usize {
    self.hits.len()
  }

  pub fn is_empty(&self) -> bool {
    self.hits.is_empty()
  }

  // Consecutive boundary points, wrapping around from the last to the first.
  fn edges(&self) -> impl Iterator<Item = (&Point<T>, &Point<T>)> + '_ {
    self
      .hits
      .iter()
      .zip(self.hits.iter().cycle().skip(1))
      .map(|(a, b)| (&a.point, &b.point))
  }

  /// Enclosed area (shoelace formula). Zero for fewer than three points.
  pub fn area(&self) -> T {
    if self.hits.len() < 3 {
      return T::zero();
    }
    let twice_area: T = self
      .edges()
      .map(|(a, b)| a[0] * b[1] - b[0] * a[1])
      .sum();
    (twice_area / T::from_f64(2.0)).abs()
  }

  /// Whether `pt` lies inside the visible region (non-zero winding number).
  /// Points exactly on the boundary may go either way.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    if self.hits.len() < 3 {
      return false;
    }
    let mut winding = 0i32;
    for (a, b) in self.edges() {
      if a[1] <= pt[1] {
        if b[1] > pt[1] && a.orient(b, pt).is_ccw() {
          winding += 1;
        }
      } else if b[1] <= pt[1] && a.orient(b, pt).is_cw() {
        winding -= 1;
      }
    }
    winding != 0
  }

  /// SVG path data (`M x y L x y ... Z`) for filling the polygon. Empty for an
  /// empty polygon.
  pub fn to_svg_path(&self) -> String {
    let mut path = String::new();
    for (i, pt) in self.points().enumerate() {
      let command = if i == 0 { "M" } else { " L" };
      // Writing to a String cannot fail.
      let _ = write!(path, "{} {} {}", command, pt[0], pt[1]);
    }
    if !path.is_empty() {
      path.push_str(" Z");
    }
    path
  }
}
