use super::{Point, Segment, Vector};
use crate::{Intersects, RayScalar};

/// Largest `|r̂ × ŝ|` for which a ray and a segment count as parallel.
pub const DEFAULT_PARALLEL_TOLERANCE: f64 = 1e-12;

///////////////////////////////////////////////////////////////////////////////
// Ray

/// Half-line `origin + t * direction` for `t >= 0`.
///
/// The ray parameter of an [`Intersection`] is measured in multiples of
/// `direction`, so it is a Euclidean distance only when `direction` has unit
/// length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T> {
  pub origin: Point<T>,
  pub direction: Vector<T>,
}

impl<T> Ray<T> {
  pub const fn new(origin: Point<T>, direction: Vector<T>) -> Ray<T> {
    Ray { origin, direction }
  }
}

impl<T: RayScalar> Ray<T> {
  /// Ray from `origin` passing through `through`. The parameter of `through`
  /// is exactly 1.
  pub fn through(origin: Point<T>, through: &Point<T>) -> Ray<T> {
    let direction = through - &origin;
    Ray::new(origin, direction)
  }

  /// Unit-direction ray from `origin` at `angle` radians.
  pub fn from_angle(origin: Point<T>, angle: T) -> Ray<T> {
    Ray::new(origin, Vector::from_angle(angle))
  }

  pub fn point_at(&self, t: T) -> Point<T> {
    &self.origin + &(self.direction * t)
  }

  /// Intersect with `segment`, treating directions whose unit vectors have a
  /// cross product no larger than `tolerance` as parallel. Parallel and
  /// collinear configurations never intersect.
  pub fn intersect_with_tolerance(
    &self,
    segment: &Segment<T>,
    tolerance: T,
  ) -> Option<Intersection<T>> {
    let ray_delta = self.direction;
    let segment_delta = segment.direction();
    let (ray_unit, segment_unit) = match (ray_delta.normalize(), segment_delta.normalize()) {
      (Some(ray_unit), Some(segment_unit)) => (ray_unit, segment_unit),
      _ => return None,
    };
    if ray_unit.cross(&segment_unit).abs() <= tolerance {
      return None;
    }

    // origin + ray_delta * t1 = segment.a + segment_delta * t2
    let [rpx, rpy] = self.origin.array;
    let [rdx, rdy] = ray_delta.0;
    let [spx, spy] = segment.a.array;
    let [sdx, sdy] = segment_delta.0;
    let t2 = (rdx * (spy - rpy) + rdy * (rpx - spx)) / (sdx * rdy - sdy * rdx);
    let t1 = if rdx.abs() >= rdy.abs() {
      (spx + sdx * t2 - rpx) / rdx
    } else {
      (spy + sdy * t2 - rpy) / rdy
    };

    if !t1.is_finite() || !t2.is_finite() {
      return None;
    }
    if t1 < T::zero() || t2 < T::zero() || t2 > T::one() {
      return None;
    }
    Some(Intersection {
      point: self.point_at(t1),
      param: t1,
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Ray / Segment intersection

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<T> {
  pub point: Point<T>,
  /// Position along the ray, in multiples of the ray direction.
  pub param: T,
}

impl<'a, T> Intersects<&'a Segment<T>> for &Ray<T>
where
  T: RayScalar,
{
  type Result = Intersection<T>;
  fn intersect(self, other: &'a Segment<T>) -> Option<Self::Result> {
    self.intersect_with_tolerance(other, T::from_f64(DEFAULT_PARALLEL_TOLERANCE))
  }
}
