use array_init::array_init;
use num_traits::Float;
use std::ops::Index;
use std::ops::Mul;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T: Float> Vector<T> {
  /// Unit vector pointing at `angle` radians, counter-clockwise from the x-axis.
  pub fn from_angle(angle: T) -> Vector<T> {
    let (sin, cos) = angle.sin_cos();
    Vector([cos, sin])
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }

  pub fn magnitude(&self) -> T {
    self.0[0].hypot(self.0[1])
  }

  /// Unit vector with the same direction. `None` for zero-length or
  /// non-finite vectors.
  pub fn normalize(&self) -> Option<Vector<T>> {
    let magnitude = self.magnitude();
    if magnitude.is_zero() || !magnitude.is_finite() {
      return None;
    }
    Some(Vector(array_init(|i| self.0[i] / magnitude)))
  }

  pub fn dot(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }

  /// z-component of the 3D cross product.
  pub fn cross(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

// vector * scalar = vector
impl<T> Mul<T> for Vector<T>
where
  T: Mul<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn mul(self, scalar: T) -> Vector<T> {
    Vector(array_init(|i| self.0[i] * scalar))
  }
}

impl<T> Neg for Vector<T>
where
  T: Neg<Output = T> + Copy,
{
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| -self.0[i]))
  }
}
