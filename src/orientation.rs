use std::cmp::Ordering;

use crate::RayScalar;

/// Side of a directed line `p -> q` that a third point `r` lies on.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  /// `r` is to the left of `p -> q`.
  CounterClockWise,
  /// `r` is to the right of `p -> q`.
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Turn taken when walking `p -> q -> r`. Exact for all finite inputs.
  ///
  /// ```rust
  /// # use sightline::data::Point;
  /// # use sightline::Orientation;
  /// let p = Point::new([0.0, 0.0]);
  /// let q = Point::new([0.0, 1.0]);
  /// assert!(Orientation::new(&p, &q, &Point::new([0.0, 2.0])).is_colinear());
  /// assert!(Orientation::new(&p, &q, &Point::new([-1.0, 2.0])).is_ccw());
  /// assert!(Orientation::new(&p, &q, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T: RayScalar>(p: &[T; 2], q: &[T; 2], r: &[T; 2]) -> Orientation {
    Orientation::from(T::cmp_slope(p, q, r))
  }

  pub fn is_colinear(self) -> bool {
    self == CoLinear
  }

  pub fn is_ccw(self) -> bool {
    self == CounterClockWise
  }

  pub fn is_cw(self) -> bool {
    self == ClockWise
  }

  /// The orientation of `r -> q -> p` given that of `p -> q -> r`.
  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

impl From<Ordering> for Orientation {
  fn from(ord: Ordering) -> Orientation {
    match ord {
      Ordering::Greater => CounterClockWise,
      Ordering::Less => ClockWise,
      Ordering::Equal => CoLinear,
    }
  }
}
