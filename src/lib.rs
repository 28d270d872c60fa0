// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Visibility polygons for a viewer surrounded by opaque line segments.
//!
//! Rays are cast from the viewer towards every segment endpoint (and a hair to
//! either side of it), the nearest hit along each ray is kept, and the hits are
//! sorted by angle to form the boundary of the visible region.
//!
//! ```rust
//! # use sightline::algorithms::visibility::compute_visibility_polygon;
//! # use sightline::data::{Point, Segment};
//! let border = Segment::border(Point::new([-10.0, -10.0]), Point::new([10.0, 10.0]));
//! let polygon = compute_visibility_polygon(&Point::new([0.0, 0.0]), &border);
//! assert!(!polygon.is_empty());
//! ```
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::Sum;

pub mod algorithms;
pub mod config;
pub mod data;
mod intersection;
mod orientation;
pub mod scene;
pub mod svg;

pub use config::{PointDedup, RayCastConfig, SceneConfig};
pub use intersection::Intersects;
pub use orientation::Orientation;
pub use scene::Scene;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to read scene: {0}")]
  Io(#[from] std::io::Error),
  #[error("malformed scene configuration: {0}")]
  Json(#[from] serde_json::Error),
  #[error("non-finite coordinate")]
  NonFiniteCoordinate,
  /// Both endpoints of a segment are the same point.
  #[error("degenerate segment")]
  DegenerateSegment,
  #[error("insufficient vertices")]
  InsufficientVertices,
  /// Boundary points are not in ascending angular order.
  #[error("boundary is not sorted by angle")]
  UnsortedBoundary,
  #[error("invalid configuration: {0}")]
  InvalidConfig(&'static str),
}

/// Coordinate type for points, segments and rays.
pub trait RayScalar: Float + Debug + Display + Sum + Default + Send + Sync + 'static {
  /// Totally ordered, hashable wrapper used for sorting and deduplication.
  /// `-0.0` and `0.0` compare equal.
  type Total: Ord + Hash + Copy + Debug;

  fn from_f64(val: f64) -> Self;
  fn total(self) -> Self::Total;
  /// Orientation of `r` relative to the directed line `p -> q`. `Greater` means
  /// counter-clockwise.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl RayScalar for $ty {
        type Total = ordered_float::OrderedFloat<$ty>;

        #[allow(clippy::cast_lossless)]
        fn from_f64(val: f64) -> Self {
          val as $ty
        }

        fn total(self) -> Self::Total {
          ordered_float::OrderedFloat(self)
        }

        // Adaptive precision orientation from `geometry_predicates`. Exact for
        // every finite input.
        #[allow(clippy::cast_lossless)]
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [p[0] as f64, p[1] as f64],
            [q[0] as f64, q[1] as f64],
            [r[0] as f64, r[1] as f64],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
