use log::debug;

use crate::algorithms::visibility::compute_visibility_polygon_with;
use crate::config::{RayCastConfig, SceneConfig};
use crate::data::{Point, Segment, VisibilityPolygon};
use crate::{Error, RayScalar};

/// A viewer among opaque segments, with its visibility polygon cached.
///
/// Changes to the viewer or the segments only mark the scene dirty. The
/// polygon is rebuilt by [`Scene::recompute_if_dirty`], at most once per batch
/// of changes.
#[derive(Debug, Clone)]
pub struct Scene<T> {
  viewer: Point<T>,
  segments: Vec<Segment<T>>,
  config: RayCastConfig,
  polygon: VisibilityPolygon<T>,
  dirty: bool,
  recomputations: usize,
}

impl<T: RayScalar> Scene<T> {
  pub fn new(viewer: Point<T>, segments: Vec<Segment<T>>) -> Result<Scene<T>, Error> {
    Scene::with_config(viewer, segments, RayCastConfig::default())
  }

  pub fn with_config(
    viewer: Point<T>,
    segments: Vec<Segment<T>>,
    config: RayCastConfig,
  ) -> Result<Scene<T>, Error> {
    if !viewer.is_finite() {
      return Err(Error::NonFiniteCoordinate);
    }
    for segment in &segments {
      segment.validate()?;
    }
    config.validate()?;
    Ok(Scene {
      viewer,
      segments,
      config,
      polygon: VisibilityPolygon::empty(viewer),
      dirty: true,
      recomputations: 0,
    })
  }

  /// The canvas border of a `width` x `height` canvas plus six polygonal
  /// obstacles, with the viewer at the center of the canvas.
  pub fn demo(width: T, height: T) -> Result<Scene<T>, Error> {
    if !(width > T::zero() && height > T::zero()) {
      return Err(Error::InvalidConfig("canvas size must be positive"));
    }
    let pt = |x: f64, y: f64| Point::new([T::from_f64(x), T::from_f64(y)]);
    let obstacles: [&[(f64, f64)]; 6] = [
      &[(100., 150.), (120., 50.), (200., 80.), (140., 210.)],
      &[(100., 200.), (120., 250.), (60., 300.)],
      &[(200., 260.), (220., 150.), (300., 200.), (350., 320.)],
      &[(340., 60.), (360., 40.), (370., 70.)],
      &[(450., 190.), (560., 170.), (540., 270.), (430., 290.)],
      &[(400., 95.), (580., 50.), (480., 150.)],
    ];

    let origin = Point::new([T::zero(), T::zero()]);
    let mut segments = Segment::border(origin, Point::new([width, height]));
    for corners in obstacles {
      let corners: Vec<Point<T>> = corners.iter().map(|&(x, y)| pt(x, y)).collect();
      segments.extend(Segment::ring(&corners)?);
    }
    let two = T::from_f64(2.0);
    Scene::new(Point::new([width / two, height / two]), segments)
  }

  pub fn viewer(&self) -> &Point<T> {
    &self.viewer
  }

  pub fn segments(&self) -> &[Segment<T>] {
    &self.segments
  }

  pub fn config(&self) -> &RayCastConfig {
    &self.config
  }

  /// The most recently computed polygon. Stale while the scene is dirty.
  pub fn polygon(&self) -> &VisibilityPolygon<T> {
    &self.polygon
  }

  pub fn is_dirty(&self) -> bool {
    self.dirty
  }

  /// Number of times the polygon has been rebuilt.
  pub fn recomputations(&self) -> usize {
    self.recomputations
  }

  /// Move the viewer. Moving to the current position leaves the scene clean.
  pub fn move_viewer(&mut self, viewer: Point<T>) -> Result<(), Error> {
    if !viewer.is_finite() {
      return Err(Error::NonFiniteCoordinate);
    }
    if viewer != self.viewer {
      self.viewer = viewer;
      self.dirty = true;
    }
    Ok(())
  }

  /// Swap in a new set of obstacles. On error the scene is unchanged.
  pub fn replace_segments(&mut self, segments: Vec<Segment<T>>) -> Result<(), Error> {
    for segment in &segments {
      segment.validate()?;
    }
    self.segments = segments;
    self.dirty = true;
    Ok(())
  }

  /// Rebuild the polygon if anything changed since the last rebuild. Returns
  /// the new polygon, or `None` if the cached one is still current.
  pub fn recompute_if_dirty(&mut self) -> Option<&VisibilityPolygon<T>> {
    if !self.dirty {
      return None;
    }
    self.polygon = compute_visibility_polygon_with(&self.viewer, &self.segments, &self.config);
    self.dirty = false;
    self.recomputations += 1;
    debug!(
      "recomputed visibility polygon #{} with {} points",
      self.recomputations,
      self.polygon.len()
    );
    Some(&self.polygon)
  }
}

impl Scene<f64> {
  pub fn to_config(&self) -> SceneConfig {
    SceneConfig {
      segments: self.segments.clone(),
      viewer: Some(self.viewer),
      ray_cast: self.config,
    }
  }
}
