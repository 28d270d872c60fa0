//! Scene and solver configuration.
//!
//! A scene file lists the obstacle segments and, optionally, the initial viewer
//! position and solver settings:
//!
//! ```json
//! {
//!   "segments": [
//!     { "a": { "x": 0, "y": 0 }, "b": { "x": 640, "y": 0 } }
//!   ],
//!   "viewer": { "x": 320, "y": 240 },
//!   "ray_cast": { "jitter": 0.00001, "dedup": { "mode": "exact" } }
//! }
//! ```
use log::trace;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::data::{Point, Segment, DEFAULT_PARALLEL_TOLERANCE};
use crate::{Error, Scene};

/// Angular offset, in radians, of the two extra rays cast beside every
/// obstacle corner.
pub const DEFAULT_JITTER: f64 = 0.00001;

/// How segment endpoints are merged before rays are cast at them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PointDedup {
  /// Endpoints merge only when their coordinates are identical.
  #[default]
  Exact,
  /// Endpoints merge when they round to the same cell of a square grid.
  Quantized { cell: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayCastConfig {
  pub jitter: f64,
  pub parallel_tolerance: f64,
  pub dedup: PointDedup,
}

impl Default for RayCastConfig {
  fn default() -> Self {
    RayCastConfig {
      jitter: DEFAULT_JITTER,
      parallel_tolerance: DEFAULT_PARALLEL_TOLERANCE,
      dedup: PointDedup::Exact,
    }
  }
}

impl RayCastConfig {
  pub fn validate(&self) -> Result<(), Error> {
    if !(self.jitter.is_finite() && self.jitter > 0.0) {
      return Err(Error::InvalidConfig("jitter must be positive"));
    }
    if !(self.parallel_tolerance.is_finite() && self.parallel_tolerance >= 0.0) {
      return Err(Error::InvalidConfig("parallel_tolerance must not be negative"));
    }
    if let PointDedup::Quantized { cell } = self.dedup {
      if !(cell.is_finite() && cell > 0.0) {
        return Err(Error::InvalidConfig("dedup cell must be positive"));
      }
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
  pub segments: Vec<Segment<f64>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub viewer: Option<Point<f64>>,
  #[serde(default)]
  pub ray_cast: RayCastConfig,
}

impl SceneConfig {
  pub fn from_json_str(json: &str) -> Result<SceneConfig, Error> {
    let config: SceneConfig = serde_json::from_str(json)?;
    trace!(
      "parsed scene configuration with {} segments",
      config.segments.len()
    );
    Ok(config)
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<SceneConfig, Error> {
    let path = path.as_ref();
    trace!("loading scene from {}", path.display());
    let json = fs::read_to_string(path)?;
    SceneConfig::from_json_str(&json)
  }

  pub fn to_json_string(&self) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Center of the bounding box of all segment endpoints.
  pub fn bounding_box_center(&self) -> Option<Point<f64>> {
    let mut endpoints = self.segments.iter().flat_map(|s| s.endpoints());
    let first = endpoints.next()?;
    let (min, max) = endpoints.fold((*first, *first), |(min, max), pt| {
      (
        Point::new([min[0].min(pt[0]), min[1].min(pt[1])]),
        Point::new([max[0].max(pt[0]), max[1].max(pt[1])]),
      )
    });
    Some(Point::new([(min[0] + max[0]) / 2.0, (min[1] + max[1]) / 2.0]))
  }

  /// Build a scene. Without an explicit viewer the viewer starts at the center
  /// of the segments' bounding box.
  pub fn into_scene(self) -> Result<Scene<f64>, Error> {
    let viewer = self
      .viewer
      .or_else(|| self.bounding_box_center())
      .unwrap_or(Point::new([0.0, 0.0]));
    Scene::with_config(viewer, self.segments, self.ray_cast)
  }
}
