pub mod visibility;

#[doc(inline)]
pub use visibility::compute_visibility_polygon;
