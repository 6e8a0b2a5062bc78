//! Example: Apply each transform builder to a few points.
//!
//! Run with: cargo run --example transform_points -- 30
//! (the optional argument is a rotation angle in degrees, default 90)

use std::env;

use anyhow::{Context, Result};
use lib3d::{Mat3, Vec3};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let degrees: f64 = match env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("angle must be a number of degrees, got {:?}", arg))?,
        None => 90.0,
    };
    let theta = degrees.to_radians();
    log::info!("Using theta = {} degrees ({} rad)", degrees, theta);

    let points = [
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, 2.0, 3.0)?,
    ];
    let diagonal = Vec3::new(1.0, 1.0, 1.0)?;

    let transforms = [
        ("x-axis rotation", Mat3::x_axis_rotation(theta)?),
        ("y-axis rotation", Mat3::y_axis_rotation(theta)?),
        ("z-axis rotation", Mat3::z_axis_rotation(theta)?),
        ("rotation about [1 1 1]", Mat3::axis_rotation(&diagonal, theta)?),
        ("scale 2x3x4", Mat3::scale(2.0, 3.0, 4.0)?),
        ("scale along x", Mat3::scale_along(&Vec3::X, 1.0)?),
        ("reflection (z)", Mat3::reflection(&Vec3::Z)?),
    ];

    for (name, m) in &transforms {
        println!("\n=== {} ===", name);
        println!("  matrix: {}", m);
        for p in &points {
            let q = p.multiply_matrix(m)?;
            println!("  {} -> {} (|q| = {:.6})", p, q, q.magnitude());
        }
    }

    // Composition applies the left matrix first
    let spin_then_stretch = transforms[2].1.multiply(&transforms[4].1)?;
    let q = Vec3::X.multiply_matrix(&spin_then_stretch)?;
    println!("\nz-rotation then scale: {} -> {}", Vec3::X, q);

    match Vec3::ZERO.normalize() {
        Ok(n) => log::warn!("zero vector normalized to {}", n),
        Err(e) => log::info!("Zero vector has no direction: {}", e),
    }

    Ok(())
}
