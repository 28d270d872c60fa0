mod scene_config {
  use sightline::data::*;
  use sightline::*;

  const ROOM_WITH_PILLAR: &str = r#"{
    "segments": [
      { "a": { "x": 0, "y": 0 }, "b": { "x": 100, "y": 0 } },
      { "a": { "x": 100, "y": 0 }, "b": { "x": 100, "y": 100 } },
      { "a": { "x": 100, "y": 100 }, "b": { "x": 0, "y": 100 } },
      { "a": { "x": 0, "y": 100 }, "b": { "x": 0, "y": 0 } },
      { "a": { "x": 60, "y": 40 }, "b": { "x": 70, "y": 40 } },
      { "a": { "x": 70, "y": 40 }, "b": { "x": 70, "y": 60 } },
      { "a": { "x": 70, "y": 60 }, "b": { "x": 60, "y": 60 } },
      { "a": { "x": 60, "y": 60 }, "b": { "x": 60, "y": 40 } }
    ],
    "viewer": { "x": 20, "y": 50 }
  }"#;

  #[test]
  fn load_and_solve() -> Result<(), Error> {
    let mut scene = SceneConfig::from_json_str(ROOM_WITH_PILLAR)?.into_scene()?;
    assert_eq!(scene.segments().len(), 8);
    let polygon = scene.recompute_if_dirty().ok_or(Error::InvalidConfig("clean"))?;
    // 8 unique endpoints, 3 rays each. Rays aimed exactly at a corner may slip
    // past it.
    assert!(polygon.len() >= 16 && polygon.len() <= 24);
    assert!(polygon.contains(&Point::new([50.0, 50.0])));
    assert!(!polygon.contains(&Point::new([90.0, 50.0])));
    assert!(polygon.contains(&Point::new([90.0, 5.0])));
    Ok(())
  }

  #[test]
  fn scene_json_round_trip() -> Result<(), Error> {
    let scene = SceneConfig::from_json_str(ROOM_WITH_PILLAR)?.into_scene()?;
    let json = scene.to_config().to_json_string()?;
    let copy = SceneConfig::from_json_str(&json)?.into_scene()?;
    assert_eq!(copy.segments(), scene.segments());
    assert_eq!(copy.viewer(), scene.viewer());
    Ok(())
  }

  #[test]
  fn rejects_degenerate_segment() {
    let json = r#"{ "segments": [ { "a": { "x": 1, "y": 1 }, "b": { "x": 1, "y": 1 } } ] }"#;
    let result = SceneConfig::from_json_str(json).and_then(|config| config.into_scene());
    assert!(matches!(result, Err(Error::DegenerateSegment)));
  }
}

mod visibility {
  use sightline::algorithms::visibility::*;
  use sightline::data::*;
  use sightline::*;

  fn room() -> Vec<Segment<f64>> {
    Segment::border(Point::new([0.0, 0.0]), Point::new([640.0, 480.0]))
  }

  #[test]
  fn empty_room_is_fully_visible() {
    let polygon = compute_visibility_polygon(&Point::new([100.0, 300.0]), &room());
    assert!((polygon.area() - 640.0 * 480.0).abs() < 1.0);
    for pt in polygon.points() {
      let on_border = pt[0].abs() < 1e-6
        || (pt[0] - 640.0).abs() < 1e-6
        || pt[1].abs() < 1e-6
        || (pt[1] - 480.0).abs() < 1e-6;
      assert!(on_border, "{:?} is not on the border", pt);
    }
  }

  #[test]
  fn wall_hides_the_far_side() {
    let mut segments = room();
    segments.push(Segment::new(Point::new([320.0, 100.0]), Point::new([320.0, 380.0])));
    let polygon = compute_visibility_polygon(&Point::new([100.0, 240.0]), &segments);
    assert!(!polygon.contains(&Point::new([500.0, 240.0])));
    assert!(polygon.contains(&Point::new([300.0, 240.0])));
    // Around the end of the wall.
    assert!(polygon.contains(&Point::new([330.0, 10.0])));
  }

  #[test]
  fn repeated_calls_agree() {
    let scene = Scene::<f64>::demo(640.0, 480.0).unwrap();
    let first = compute_visibility_polygon(scene.viewer(), scene.segments());
    let second = compute_visibility_polygon(scene.viewer(), scene.segments());
    assert_eq!(first, second);
  }

  #[test]
  fn custom_jitter() {
    let config = RayCastConfig {
      jitter: 1e-3,
      ..RayCastConfig::default()
    };
    let polygon = compute_visibility_polygon_with(&Point::new([320.0, 240.0]), &room(), &config);
    for pair in polygon.hits().windows(2) {
      assert!(pair[0].angle <= pair[1].angle);
    }
    assert!((polygon.area() - 640.0 * 480.0).abs() < 1.0);
  }
}

mod dirty_flag {
  use sightline::data::*;
  use sightline::*;

  #[test]
  fn follows_the_viewer() -> Result<(), Error> {
    let mut scene = Scene::<f64>::demo(640.0, 480.0)?;
    let path = [[320.0, 240.0], [321.0, 240.0], [321.0, 240.0], [30.0, 30.0]];
    let mut frames = 0;
    for pos in path {
      scene.move_viewer(Point::new(pos))?;
      if let Some(polygon) = scene.recompute_if_dirty() {
        assert_eq!(polygon.origin(), &Point::new(pos));
        frames += 1;
      }
    }
    // The scene starts dirty; the repeated position costs nothing.
    assert_eq!(frames, 3);
    assert_eq!(scene.recomputations(), 3);
    Ok(())
  }
}
