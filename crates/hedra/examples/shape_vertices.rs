//! Print the vertices of the canonical shapes and a few random ones.
//!
//! Usage:
//!   cargo run -p hedra --example shape_vertices -- special
//!   cargo run -p hedra --example shape_vertices -- random
//!
//! Each vertex line uses the kernel's textual form (`x y z`).

use hedra::shape::rand::{random_tangent_shape, RandomTangentParams};
use hedra::shape::{special, ConvexShape, ShapeCfg};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "special".to_string());
    match mode.as_str() {
        "special" => {
            show("cube", &special::cube(1.0));
            show("octahedron", &special::octahedron(1.0));
            show("prism6", &special::prism(6, 1.0, 0.5));
        }
        "random" => {
            let params = RandomTangentParams::default();
            for seed in 0..3 {
                match random_tangent_shape(params, seed) {
                    Ok(shape) => show(&format!("random seed={seed}"), &shape),
                    Err(e) => eprintln!("seed={seed}: {e}"),
                }
            }
        }
        _ => {
            eprintln!("usage: shape_vertices [special|random]");
        }
    }
}

fn show(name: &str, shape: &ConvexShape) {
    let verts = shape.vertices(ShapeCfg::default());
    println!("{name}: sides={} vertices={}", shape.sides.len(), verts.len());
    for v in verts {
        println!("  {v}");
    }
}
