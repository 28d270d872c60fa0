use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::{Point, Vector};
use crate::Error;

///////////////////////////////////////////////////////////////////////////////
// Segment

/// Opaque obstacle edge from `a` to `b`. Both endpoints belong to the segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize + Copy", deserialize = "T: Deserialize<'de>"))]
pub struct Segment<T> {
  pub a: Point<T>,
  pub b: Point<T>,
}

impl<T> Segment<T> {
  pub const fn new(a: Point<T>, b: Point<T>) -> Segment<T> {
    Segment { a, b }
  }

  pub fn endpoints(&self) -> [&Point<T>; 2] {
    [&self.a, &self.b]
  }
}

impl<T: Float> Segment<T> {
  /// `b - a`.
  pub fn direction(&self) -> Vector<T> {
    &self.b - &self.a
  }

  pub fn length(&self) -> T {
    self.direction().magnitude()
  }

  /// Segments must have finite endpoints and non-zero length.
  pub fn validate(&self) -> Result<(), Error> {
    if !self.a.is_finite() || !self.b.is_finite() {
      Err(Error::NonFiniteCoordinate)
    } else if self.a == self.b {
      Err(Error::DegenerateSegment)
    } else {
      Ok(())
    }
  }

  /// Point on the segment nearest to `pt`.
  pub fn closest_point(&self, pt: &Point<T>) -> Point<T> {
    let direction = self.direction();
    let t = (pt - &self.a).dot(&direction) / direction.squared_magnitude();
    let t = t.max(T::zero()).min(T::one());
    &self.a + &(direction * t)
  }

  pub fn distance_to(&self, pt: &Point<T>) -> T {
    self.closest_point(pt).euclidean_distance(pt)
  }

  /// The four edges of the axis-aligned box spanned by `min` and `max`,
  /// walking counter-clockwise from `min`.
  pub fn border(min: Point<T>, max: Point<T>) -> Vec<Segment<T>> {
    let corners = [
      min,
      Point::new([max[0], min[1]]),
      max,
      Point::new([min[0], max[1]]),
    ];
    closed_chain(&corners)
  }

  /// Closed outline of a polygon: one segment per consecutive pair of points,
  /// plus the segment from the last point back to the first.
  ///
  /// # Errors
  ///
  /// Fails with fewer than three points or when any resulting segment is
  /// invalid (see [`Segment::validate`]).
  pub fn ring(points: &[Point<T>]) -> Result<Vec<Segment<T>>, Error> {
    if points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    let segments = closed_chain(points);
    for segment in &segments {
      segment.validate()?;
    }
    Ok(segments)
  }
}

fn closed_chain<T: Copy>(points: &[Point<T>]) -> Vec<Segment<T>> {
  points
    .iter()
    .zip(points.iter().cycle().skip(1))
    .map(|(a, b)| Segment::new(*a, *b))
    .collect()
}
