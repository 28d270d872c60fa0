//! sightline - visibility polygons from the command line
//!
//! Usage:
//!   sightline [scene.json] [--svg]
//!
//! Reads viewer positions, one `x y` pair per line, from stdin. Without
//! `--svg`, prints the boundary of the visible region after every move as a
//! JSON array of `{"x": .., "y": ..}` points. With `--svg`, prints an SVG of the
//! final scene once input ends. Without a scene file a 640x480 demo scene is
//! used.
//!
//! Set `RUST_LOG=debug` to trace recomputations.

use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

use log::{info, warn};

use sightline::data::Point;
use sightline::svg::render_scene;
use sightline::{Scene, SceneConfig};

const DEMO_WIDTH: f64 = 640.0;
const DEMO_HEIGHT: f64 = 480.0;

fn print_usage(program: &str) {
  eprintln!("Usage: {} [scene.json] [--svg]", program);
  eprintln!();
  eprintln!("Reads `x y` viewer positions from stdin, one per line.");
}

fn parse_position(line: &str) -> Option<Point<f64>> {
  let mut fields = line.split_whitespace();
  let x = fields.next()?.parse().ok()?;
  let y = fields.next()?.parse().ok()?;
  match fields.next() {
    Some(_) => None,
    None => Some(Point::new([x, y])),
  }
}

fn main() -> Result<(), Box<dyn Error>> {
  env_logger::init();

  let mut args = env::args();
  let program = args.next().unwrap_or_else(|| "sightline".to_string());
  let mut scene_path = None;
  let mut svg = false;
  for arg in args {
    match arg.as_str() {
      "--svg" => svg = true,
      "help" | "--help" | "-h" => {
        print_usage(&program);
        return Ok(());
      }
      _ if scene_path.is_none() => scene_path = Some(arg.clone()),
      other => {
        print_usage(&program);
        return Err(format!("unexpected argument: {}", other).into());
      }
    }
  }

  let mut scene = match &scene_path {
    Some(path) => {
      info!("loading scene from {}", path);
      SceneConfig::from_path(path)?.into_scene()?
    }
    None => {
      info!("using {}x{} demo scene", DEMO_WIDTH, DEMO_HEIGHT);
      Scene::demo(DEMO_WIDTH, DEMO_HEIGHT)?
    }
  };
  info!(
    "{} segments, viewer at ({}, {})",
    scene.segments().len(),
    scene.viewer()[0],
    scene.viewer()[1]
  );

  let stdout = io::stdout();
  let mut out = stdout.lock();
  for (lineno, line) in io::stdin().lock().lines().enumerate() {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }
    let Some(position) = parse_position(&line) else {
      warn!("line {}: expected `x y`, got {:?}", lineno + 1, line);
      continue;
    };
    if let Err(err) = scene.move_viewer(position) {
      warn!("line {}: {}", lineno + 1, err);
      continue;
    }
    if svg {
      continue;
    }
    // An unchanged position reprints the cached polygon.
    scene.recompute_if_dirty();
    serde_json::to_writer(&mut out, &scene.polygon().to_points())?;
    writeln!(out)?;
  }

  if svg {
    scene.recompute_if_dirty();
    out.write_all(render_scene(&scene).as_bytes())?;
  }
  info!("done after {} recomputations", scene.recomputations());
  Ok(())
}
