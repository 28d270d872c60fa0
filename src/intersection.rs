/// Intersection between two geometric objects. `None` means the objects do not
/// meet (or meet in a way that carries no useful answer, such as overlapping
/// parallel lines).
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
