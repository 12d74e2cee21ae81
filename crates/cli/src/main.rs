mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hedra::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{ensure_parent, write_sidecar, Sidecar};

#[derive(Parser)]
#[command(name = "hedra")]
#[command(about = "Convex shapes from half-spaces: vertices, legality, rotation")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate the legal vertices of a shape
    Vertices {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Emit JSON instead of one `x y z` line per vertex
        #[arg(long)]
        json: bool,
        /// Also write the vertices to this file (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check whether a point lies inside every side of a shape
    Legal {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(long, required = true, num_args = 3, allow_negative_numbers = true, value_names = ["X", "Y", "Z"])]
        point: Vec<f64>,
    },
    /// Rotate a point about a pivot by Euler angles (radians)
    Rotate {
        #[arg(long, required = true, num_args = 3, allow_negative_numbers = true, value_names = ["X", "Y", "Z"])]
        point: Vec<f64>,
        #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.0, 0.0, 0.0])]
        pivot: Vec<f64>,
        #[arg(long, required = true, num_args = 3, allow_negative_numbers = true, value_names = ["AX", "AY", "AZ"])]
        angles: Vec<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
enum ShapeKind {
    Cube,
    Octahedron,
    Prism,
    Random,
}

#[derive(Args, Debug, Serialize)]
struct ShapeArgs {
    #[arg(long, value_enum, default_value_t = ShapeKind::Cube)]
    shape: ShapeKind,
    /// Half-width (cube), radius (octahedron, random) or apothem (prism)
    #[arg(long, default_value_t = 1.0)]
    size: f64,
    /// Prism: number of lateral sides; random: number of sides
    #[arg(long, default_value_t = 6)]
    sides: usize,
    /// Prism half-height
    #[arg(long, default_value_t = 1.0)]
    half_height: f64,
    /// Random shape seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Debug, Serialize)]
struct VertexReport {
    shape: ShapeKind,
    sides: usize,
    vertices: Vec<[f64; 3]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Vertices { shape, json, out } => vertices(&shape, json, out.as_deref()),
        Action::Legal { shape, point } => legal(&shape, to_vec3(&point)?),
        Action::Rotate {
            point,
            pivot,
            angles,
        } => rotate(to_vec3(&point)?, to_vec3(&pivot)?, to_vec3(&angles)?),
        Action::Report => report(),
    }
}

fn to_vec3(xs: &[f64]) -> Result<Vector3> {
    let arr: [f64; 3] = xs
        .try_into()
        .with_context(|| format!("expected 3 components, got {}", xs.len()))?;
    Ok(Vector3::from(arr))
}

fn build_shape(args: &ShapeArgs) -> Result<ConvexShape> {
    let shape = match args.shape {
        ShapeKind::Cube => special::cube(args.size),
        ShapeKind::Octahedron => special::octahedron(args.size),
        ShapeKind::Prism => special::prism(args.sides, args.size, args.half_height),
        ShapeKind::Random => {
            let params = RandomTangentParams {
                sides: args.sides,
                radius: args.size,
                ..Default::default()
            };
            random_tangent_shape(params, args.seed).context("drawing random shape")?
        }
    };
    Ok(shape)
}

fn vertices(args: &ShapeArgs, json: bool, out: Option<&Path>) -> Result<()> {
    let shape = build_shape(args)?;
    let verts = shape.vertices(ShapeCfg::default());
    tracing::info!(
        shape = ?args.shape,
        sides = shape.sides.len(),
        vertices = verts.len(),
        "vertices"
    );
    let text = render_lines(&verts);
    if json {
        let report = VertexReport {
            shape: args.shape,
            sides: shape.sides.len(),
            vertices: verts.iter().map(|v| v.to_array()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{text}");
    }
    if let Some(out) = out {
        ensure_parent(out)?;
        std::fs::write(out, &text).with_context(|| format!("writing {}", out.display()))?;
        let sidecar = Sidecar::new("vertices", serde_json::to_value(args)?);
        let prov = write_sidecar(out, sidecar)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote vertices");
    }
    Ok(())
}

fn render_lines(verts: &[Vector3]) -> String {
    verts.iter().map(|v| format!("{v}\n")).collect()
}

fn legal(args: &ShapeArgs, point: Vector3) -> Result<()> {
    let shape = build_shape(args)?;
    let ok = shape.contains(point);
    tracing::info!(shape = ?args.shape, point = %point, legal = ok, "legal");
    println!("{ok}");
    Ok(())
}

fn rotate(point: Vector3, pivot: Vector3, angles: Vector3) -> Result<()> {
    let r = point.rotate_around(pivot, angles);
    tracing::info!(point = %point, pivot = %pivot, angles = %angles, "rotate");
    println!("{r}");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": hedra::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
