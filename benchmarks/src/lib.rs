//! Shared setup helpers for cratering benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench deformation
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench deformation -- locator

use cratering::{Deformation, QuadSphere, QuadSphereConfig, TerrainModifier};
use glam::DVec3;

pub const RADIUS: f64 = 600_000.0;

/// Build a sphere of the given depth with 8x8-cell tiles.
pub fn setup_sphere(subdivisions: u32) -> QuadSphere {
    QuadSphere::new(QuadSphereConfig {
        radius: RADIUS,
        subdivisions,
        resolution: 8,
    })
    .expect("benchmark sphere config is valid")
}

/// A modifier with `n` craters scattered over one hemisphere, all 2 km wide.
pub fn setup_modifier(n: usize) -> TerrainModifier {
    let body = hecs::World::new().spawn(());
    let mut modifier = TerrainModifier::new();
    for i in 0..n {
        // Golden-angle spiral keeps craters evenly spread.
        let t = (i as f64 + 0.5) / n.max(1) as f64;
        let theta = i as f64 * 2.399_963_229_728_653;
        let y = t;
        let r = (1.0 - y * y).sqrt();
        let direction = DVec3::new(r * theta.cos(), y, r * theta.sin());
        let crater = Deformation::new(direction * RADIUS, body, 20.0, 2_000.0)
            .expect("benchmark crater is valid");
        modifier.add_deformation(crater);
    }
    modifier
}

/// A world holding one terrain body with `craters` craters already applied.
pub fn setup_terrain_world(subdivisions: u32, craters: usize) -> (hecs::World, hecs::Entity) {
    let mut world = hecs::World::new();
    let body = world.spawn((setup_sphere(subdivisions), setup_modifier(craters)));
    (world, body)
}
