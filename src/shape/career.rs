use rand::{Rng as _, RngCore};
use std::f32::consts::PI;

use super::{angle, ball, centered, spherical, Shape, ShapeDescriptor};
use crate::PositionBuffer;

/// Shapes of the morphing canvas, selected by hovered skill or active section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CareerShape {
    Briefcase,
    Hat,
    Cube,
    Torus,
    Sphere,
    Pyramid,
    Cylinder,
    Helix,
    Star,
}

static DESCRIPTORS: [ShapeDescriptor; 9] = [
    ShapeDescriptor {
        key: "briefcase",
        name: "Briefcase",
        color: 0x3b82f6,
        generator: briefcase,
    },
    ShapeDescriptor {
        key: "hat",
        name: "Graduation Hat",
        color: 0x10b981,
        generator: hat,
    },
    ShapeDescriptor {
        key: "cube",
        name: "Cube",
        color: 0x9333ea,
        generator: lattice_cube,
    },
    ShapeDescriptor {
        key: "torus",
        name: "Torus",
        color: 0xea580c,
        generator: torus,
    },
    ShapeDescriptor {
        key: "sphere",
        name: "Sphere",
        color: 0xffa500,
        generator: sphere,
    },
    ShapeDescriptor {
        key: "pyramid",
        name: "Pyramid",
        color: 0xec4899,
        generator: pyramid,
    },
    ShapeDescriptor {
        key: "cylinder",
        name: "Cylinder",
        color: 0x06b6d4,
        generator: cylinder,
    },
    ShapeDescriptor {
        key: "helix",
        name: "Helix",
        color: 0xd946ef,
        generator: helix,
    },
    ShapeDescriptor {
        key: "star",
        name: "Star",
        color: 0xf59e0b,
        generator: star,
    },
];

impl Shape for CareerShape {
    const ALL: &'static [Self] = &[
        Self::Briefcase,
        Self::Hat,
        Self::Cube,
        Self::Torus,
        Self::Sphere,
        Self::Pyramid,
        Self::Cylinder,
        Self::Helix,
        Self::Star,
    ];
    const DEFAULT: Self = Self::Briefcase;

    fn descriptor(self) -> &'static ShapeDescriptor {
        &DESCRIPTORS[self as usize]
    }
}

/// Solid cuboid, wider than tall.
fn briefcase(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        glam::Vec3::new(
            centered(rng) * scale * 1.5,
            centered(rng) * scale * 0.8,
            centered(rng) * scale * 0.5,
        )
    })
}

/// Flat mortarboard with a small tassel cluster above it.
fn hat(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    let board = scale * 0.7;
    let top = scale * 0.2;
    PositionBuffer::from_fn(count, |_| {
        if rng.gen::<f32>() < 0.9 {
            glam::Vec3::new(
                centered(rng) * board,
                centered(rng) * board,
                centered(rng) * 0.05 * scale,
            )
        } else {
            glam::Vec3::new(
                centered(rng) * 0.1 * scale,
                centered(rng) * 0.1 * scale,
                top + centered(rng) * 0.05 * scale,
            )
        }
    })
}

/// Regular grid walked x-major.
///
/// The side is the smallest `n` with `n³ >= count`; the walk stops once every
/// slot is written, so a non-cubic count leaves the last layer partial.
fn lattice_cube(count: usize, scale: f32, _rng: &mut dyn RngCore) -> PositionBuffer {
    let mut side = (count as f64).cbrt().round() as usize;
    while side.pow(3) < count {
        side += 1;
    }
    let spacing = scale / side as f32;
    let half = side as f32 / 2.0;
    PositionBuffer::from_fn(count, |i| {
        let x = i / (side * side);
        let y = (i / side) % side;
        let z = i % side;
        (glam::Vec3::new(x as f32, y as f32, z as f32) - half) * spacing
    })
}

fn torus(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    let major = scale / 2.5;
    let minor = scale / 6.0;
    PositionBuffer::from_fn(count, |_| {
        let theta = angle(rng);
        let phi = angle(rng);
        let ring = major + minor * phi.cos();
        glam::Vec3::new(ring * theta.cos(), ring * theta.sin(), minor * phi.sin())
    })
}

/// Solid ball of diameter `scale`.
fn sphere(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| ball(rng, scale / 2.0))
}

fn pyramid(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    let height = scale * 1.2;
    PositionBuffer::from_fn(count, |_| {
        let layer = rng.gen::<f32>();
        let size = scale * (1.0 - layer);
        glam::Vec3::new(
            centered(rng) * size,
            layer * height - height / 2.0,
            centered(rng) * size,
        )
    })
}

fn cylinder(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    let radius = scale / 2.0;
    let height = scale * 1.5;
    PositionBuffer::from_fn(count, |_| {
        let theta = angle(rng);
        // sqrt keeps the disc cross-section uniform
        let r = radius * rng.gen::<f32>().sqrt();
        glam::Vec3::new(r * theta.cos(), centered(rng) * height, r * theta.sin())
    })
}

/// Three-turn spiral with a gently breathing radius, deterministic in `i`.
fn helix(count: usize, scale: f32, _rng: &mut dyn RngCore) -> PositionBuffer {
    const TURNS: f32 = 3.0;
    let radius = scale / 2.0;
    let height = scale * 2.0;
    PositionBuffer::from_fn(count, |i| {
        let t = i as f32 / count as f32;
        let a = t * 2.0 * PI * TURNS;
        let r = radius * (0.8 + 0.2 * (t * PI * 4.0).sin());
        glam::Vec3::new(r * a.cos(), (t - 0.5) * height, r * a.sin())
    })
}

/// Core-heavy ball pushed outward along five latitude spikes.
fn star(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    const SPIKES: f32 = 5.0;
    const SPIKE_INTENSITY: f32 = 0.4;
    let radius = scale / 2.0;
    PositionBuffer::from_fn(count, |_| {
        let phi = (1.0 - 2.0 * rng.gen::<f32>()).acos();
        let theta = angle(rng);
        let r = radius * (0.2 + 0.8 * rng.gen::<f32>().powi(3));
        let spike = 1.0 + SPIKE_INTENSITY * (SPIKES * phi).sin().abs();
        spherical(r, theta, phi) * spike
    })
}
