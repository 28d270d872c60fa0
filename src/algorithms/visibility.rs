pub mod ray_cast;

#[doc(inline)]
pub use ray_cast::{compute_visibility_polygon, compute_visibility_polygon_with, unique_endpoints};
