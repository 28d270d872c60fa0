use array_init::array_init;
use std::ops::Sub;

use super::Point;
use crate::data::Vector;

// &point - &point = vector
impl<'a, 'b, T> Sub<&'a Point<T>> for &'b Point<T>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn sub(self: &'b Point<T>, other: &'a Point<T>) -> Self::Output {
    Vector(array_init(|i| self.array[i] - other.array[i]))
  }
}
