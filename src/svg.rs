//! Standalone SVG rendering of a scene.
//!
//! The visibility polygon is drawn as a filled path, the segments as black
//! lines on top of it and the viewer as a small red dot. SVG has `y` pointing
//! down, so scene coordinates are used unchanged: what is drawn matches a
//! canvas with its origin in the top-left corner.
use std::fmt::Write;

use crate::data::Point;
use crate::{RayScalar, Scene};

const MARGIN: f64 = 10.0;

/// Render `scene` with its current polygon. Call
/// [`Scene::recompute_if_dirty`] first to render an up-to-date polygon.
pub fn render_scene<T: RayScalar>(scene: &Scene<T>) -> String {
  let (min, max) = bounds(scene);
  let margin = T::from_f64(MARGIN);
  let mut svg = String::new();
  // Writing to a String cannot fail.
  let _ = writeln!(
    svg,
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
    min[0] - margin,
    min[1] - margin,
    max[0] - min[0] + margin + margin,
    max[1] - min[1] + margin + margin,
  );

  let path = scene.polygon().to_svg_path();
  if !path.is_empty() {
    let _ = writeln!(
      svg,
      r##"  <path d="{}" fill="#ffd54f" fill-opacity="0.6" stroke="none"/>"##,
      path
    );
  }
  for segment in scene.segments() {
    let _ = writeln!(
      svg,
      r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="1"/>"#,
      segment.a[0], segment.a[1], segment.b[0], segment.b[1]
    );
  }
  let viewer = scene.viewer();
  let _ = writeln!(
    svg,
    r#"  <circle cx="{}" cy="{}" r="3" fill="red"/>"#,
    viewer[0], viewer[1]
  );
  svg.push_str("</svg>\n");
  svg
}

// Bounding box of the segments and the viewer.
fn bounds<T: RayScalar>(scene: &Scene<T>) -> (Point<T>, Point<T>) {
  let viewer = *scene.viewer();
  scene
    .segments()
    .iter()
    .flat_map(|segment| segment.endpoints())
    .fold((viewer, viewer), |(min, max), pt| {
      (
        Point::new([min[0].min(pt[0]), min[1].min(pt[1])]),
        Point::new([max[0].max(pt[0]), max[1].max(pt[1])]),
      )
    })
}
