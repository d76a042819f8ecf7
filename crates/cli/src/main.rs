use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use chalkboard::api::{
    attempt_snapping, classify_with, remarkable_shapes_with, Classification, ShapeRef, Snap,
    Tolerance, Triangle, VertexId,
};
use chalkboard::Point;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Triangle chalkboard geometry from the command line")]
struct Cmd {
    /// JSON file with tolerance overrides (`zero`, `angle`, `length`)
    #[arg(long, global = true)]
    tolerance: Option<PathBuf>,

    /// Angle margin in degrees; wins over the tolerance file
    #[arg(long, global = true)]
    angle_eps_deg: Option<f64>,

    /// Write the JSON result here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Debug-level logs on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Debug)]
struct Vertices {
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    a: Point,
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    b: Point,
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    c: Point,
}

impl Vertices {
    fn triangle(&self) -> Result<Triangle> {
        Ok(Triangle::try_new(self.a, self.b, self.c)?)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Remarkable shapes and classification of the triangle ABC
    Shapes {
        #[command(flatten)]
        vertices: Vertices,
    },
    /// Lateral and angular category of the triangle ABC
    Classify {
        #[command(flatten)]
        vertices: Vertices,
    },
    /// Snap a point dragged against the fixed vertices A and B
    Snap {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
        #[arg(long, default_value_t = 0.05)]
        threshold: f64,
    },
    /// Drag one vertex (with snapping) and recompute everything
    Drag {
        #[arg(long, value_parser = parse_vertex)]
        vertex: VertexId,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
        #[command(flatten)]
        vertices: Vertices,
        #[arg(long, default_value_t = 0.05)]
        threshold: f64,
    },
    /// Print the library version and the effective tolerance
    Report,
}

#[derive(Serialize)]
struct Drawing {
    vertices: [Point; 3],
    classification: Classification,
    shapes: Vec<ShapeRef>,
}

#[derive(Serialize)]
struct Dragged {
    snap: Snap,
    #[serde(flatten)]
    drawing: Drawing,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let tol = load_tolerance(cmd.tolerance.as_deref(), cmd.angle_eps_deg)?;
    let out = cmd.out.as_deref();
    match cmd.action {
        Action::Shapes { vertices } => emit(&drawing(&vertices.triangle()?, &tol), out),
        Action::Classify { vertices } => emit(&classify_with(&vertices.triangle()?, &tol), out),
        Action::Snap {
            from,
            a,
            b,
            threshold,
        } => {
            tracing::info!(?from, threshold, "snap");
            emit(&attempt_snapping(from, [a, b], threshold), out)
        }
        Action::Drag {
            vertex,
            to,
            vertices,
            threshold,
        } => {
            tracing::info!(%vertex, ?to, threshold, "drag");
            let (moved, snap) = vertices.triangle()?.drag_vertex(vertex, to, threshold);
            let drawing = drawing(&moved, &tol);
            emit(&Dragged { snap, drawing }, out)
        }
        Action::Report => report(&tol, out),
    }
}

fn drawing(triangle: &Triangle, tol: &Tolerance) -> Drawing {
    Drawing {
        vertices: triangle.positions(),
        classification: classify_with(triangle, tol),
        shapes: remarkable_shapes_with(triangle, tol),
    }
}

fn report(tol: &Tolerance, out: Option<&Path>) -> Result<()> {
    let obj = serde_json::json!({
        "version": chalkboard::VERSION,
        "tolerance": tol,
        "angle_eps_deg": tol.angle.to_degrees(),
    });
    emit(&obj, out)
}

/// Pretty JSON to stdout, or to `out` (parent directories are created).
fn emit<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    let Some(path) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(out = %path.display(), "written");
    Ok(())
}

fn load_tolerance(path: Option<&Path>, angle_eps_deg: Option<f64>) -> Result<Tolerance> {
    let mut tol = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading tolerance file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing tolerance file {}", path.display()))?
        }
        None => Tolerance::default(),
    };
    if let Some(degrees) = angle_eps_deg {
        tol = tol.with_angle_degrees(degrees);
    }
    let tol = tol.validate()?;
    tracing::debug!(?tol, "tolerance");
    Ok(tol)
}

/// `x,y` into a point.
fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected `x,y`, got {s:?}");
    };
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok(Point::new(x, y))
}

fn parse_vertex(s: &str) -> Result<VertexId> {
    VertexId::ALL
        .into_iter()
        .find(|v| v.label().eq_ignore_ascii_case(s.trim()))
        .with_context(|| format!("expected A, B or C, got {s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_points_and_vertices() {
        assert_eq!(parse_point("1.5, -2").unwrap(), Point::new(1.5, -2.0));
        assert!(parse_point("1.5").is_err());
        assert!(parse_point("x,2").is_err());
        assert_eq!(parse_vertex("b").unwrap(), VertexId::B);
        assert!(parse_vertex("D").is_err());
    }

    #[test]
    fn parses_drag_with_negative_coordinates() {
        let cmd = Cmd::try_parse_from([
            "cli", "drag", "--vertex", "C", "--to", "-0.5,3", "--a", "0,0", "--b", "1,0", "--c",
            "0,1",
        ])
        .unwrap();
        match cmd.action {
            Action::Drag {
                vertex,
                to,
                vertices,
                threshold,
            } => {
                assert_eq!(vertex, VertexId::C);
                assert_eq!(to, Point::new(-0.5, 3.0));
                assert_eq!(vertices.b, Point::new(1.0, 0.0));
                assert_eq!(threshold, 0.05);
            }
            _ => panic!("expected drag"),
        }
    }

    #[test]
    fn tolerance_file_and_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tol.json");
        std::fs::write(&path, r#"{ "length": 1e-6 }"#).unwrap();
        let tol = load_tolerance(Some(&path), Some(2.0)).unwrap();
        assert_eq!(tol.length, 1e-6);
        assert!((tol.angle - 2f64.to_radians()).abs() < 1e-15);

        std::fs::write(&path, r#"{ "angle": -1.0 }"#).unwrap();
        assert!(load_tolerance(Some(&path), None).is_err());
        assert!(load_tolerance(Some(&dir.path().join("missing.json")), None).is_err());
    }

    #[test]
    fn emit_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/shapes.json");
        let vertices = Vertices {
            a: Point::new(0.0, 0.0),
            b: Point::new(1.0, 0.0),
            c: Point::new(0.0, 1.0),
        };
        let d = drawing(&vertices.triangle().unwrap(), &Tolerance::default());
        emit(&d, Some(&path)).unwrap();
        let back: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back["classification"]["angular"], "Right");
        assert_eq!(back["shapes"].as_array().map(Vec::len), Some(32));
    }

    #[test]
    fn non_finite_vertices_are_rejected() {
        let vertices = Vertices {
            a: Point::new(f64::INFINITY, 0.0),
            b: Point::new(1.0, 0.0),
            c: Point::new(0.0, 1.0),
        };
        let err = vertices.triangle().unwrap_err();
        assert!(err.to_string().contains("vertex A"));
    }
}
