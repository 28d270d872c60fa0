use array_init::array_init;
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::ops::Index;

use crate::{Orientation, RayScalar};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(
  from = "Coordinates<T>",
  into = "Coordinates<T>",
  bound(serialize = "T: Serialize + Copy", deserialize = "T: Deserialize<'de>")
)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// On-disk shape of a point: `{"x": .., "y": ..}`.
#[derive(Serialize, Deserialize)]
struct Coordinates<T> {
  x: T,
  y: T,
}

impl<T> From<Coordinates<T>> for Point<T> {
  fn from(coords: Coordinates<T>) -> Point<T> {
    Point::new([coords.x, coords.y])
  }
}

impl<T> From<Point<T>> for Coordinates<T> {
  fn from(point: Point<T>) -> Coordinates<T> {
    let [x, y] = point.array;
    Coordinates { x, y }
  }
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T: Float> Point<T> {
  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  /// Polar angle of `self` as seen from `origin`, in `[-π, π]`.
  pub fn angle_from(&self, origin: &Point<T>) -> T {
    let delta = self - origin;
    delta[1].atan2(delta[0])
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T {
    (self - rhs).squared_magnitude()
  }

  pub fn euclidean_distance(&self, rhs: &Point<T>) -> T {
    (self - rhs).magnitude()
  }
}

impl<T: RayScalar> Point<T> {
  pub fn orient(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

mod add;
mod sub;
