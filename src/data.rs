pub(crate) mod point;
mod ray;
mod segment;
mod vector;
mod visibility_polygon;

pub use point::Point;
pub use ray::*;
pub use segment::*;
pub use vector::Vector;
pub use visibility_polygon::*;
