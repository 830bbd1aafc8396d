//! Point-cloud shape generators.
//!
//! Every generator maps `(count, scale)` to a [`PositionBuffer`] holding exactly
//! `count` particles. Generators are pure apart from the random source they are
//! handed, and keep nothing of the buffer they return.

use rand::{Rng as _, RngCore};
use std::f32::consts::PI;

use crate::PositionBuffer;

mod artifact;
mod career;

pub use artifact::ArtifactShape;
pub use career::CareerShape;

pub type Generator = fn(usize, f32, &mut dyn RngCore) -> PositionBuffer;

pub struct ShapeDescriptor {
    /// Stable identifier, e.g. `"giza_pyramid"`.
    pub key: &'static str,
    pub name: &'static str,
    /// `0xRRGGBB`
    pub color: u32,
    pub generator: Generator,
}

/// A closed set of shapes that a particle field can display.
pub trait Shape: Copy + Eq + std::fmt::Debug + 'static {
    /// All members in their canonical order.
    const ALL: &'static [Self];
    /// Used whenever a key does not name a member of the set.
    const DEFAULT: Self;

    fn descriptor(self) -> &'static ShapeDescriptor;

    fn key(self) -> &'static str {
        self.descriptor().key
    }

    fn generate(self, count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
        (self.descriptor().generator)(count, scale, rng)
    }

    /// Resolves a key, falling back to [`Shape::DEFAULT`] for unknown ones.
    fn from_key(key: &str) -> Self {
        match Self::ALL.iter().find(|shape| shape.key() == key) {
            Some(&shape) => shape,
            None => {
                log::debug!("Unknown shape {:?}, using {:?}", key, Self::DEFAULT);
                Self::DEFAULT
            }
        }
    }
}

// Sampling helpers shared by both shape sets.

/// Uniform in `[-0.5, 0.5)`.
fn centered(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>() - 0.5
}

fn angle(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>() * 2.0 * PI
}

/// Uniform point inside a ball of the given radius.
///
/// The radius follows `R * cbrt(u)` and the polar angle `acos(2u - 1)`, which
/// keeps the density constant instead of piling particles up at the center.
fn ball(rng: &mut dyn RngCore, radius: f32) -> glam::Vec3 {
    let r = radius * rng.gen::<f32>().cbrt();
    let theta = angle(rng);
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    spherical(r, theta, phi)
}

fn spherical(r: f32, theta: f32, phi: f32) -> glam::Vec3 {
    glam::Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Picks one edge of a closed polyline uniformly and interpolates along it.
fn polyline(rng: &mut dyn RngCore, vertices: &[glam::Vec2]) -> glam::Vec2 {
    let edge = rng.gen_range(0..vertices.len() - 1);
    let t = rng.gen::<f32>();
    vertices[edge].lerp(vertices[edge + 1], t)
}

/// Vertices on the unit circle at `step * angle_unit` for each step.
fn star_vertices<const N: usize>(steps: [u32; N], angle_unit: f32) -> [glam::Vec2; N] {
    steps.map(|step| {
        let (sin, cos) = (step as f32 * angle_unit).sin_cos();
        glam::Vec2::new(cos, sin)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;

    #[test]
    fn ball_stays_inside_radius() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            assert!(ball(&mut rng, 2.0).length() <= 2.0 + 1e-5);
        }
    }

    #[test]
    fn polyline_points_lie_on_edges() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(4);
        let square = [
            glam::Vec2::new(0.0, 0.0),
            glam::Vec2::new(1.0, 0.0),
            glam::Vec2::new(1.0, 1.0),
            glam::Vec2::new(0.0, 1.0),
            glam::Vec2::new(0.0, 0.0),
        ];
        for _ in 0..200 {
            let p = polyline(&mut rng, &square);
            let on_edge = p.x.abs() < 1e-6
                || (p.x - 1.0).abs() < 1e-6
                || p.y.abs() < 1e-6
                || (p.y - 1.0).abs() < 1e-6;
            assert!(on_edge, "{:?} is not on the square outline", p);
        }
    }

    #[test]
    fn unknown_keys_fall_back_to_default() {
        assert_eq!(ArtifactShape::from_key("no_such_shape"), ArtifactShape::DEFAULT);
        assert_eq!(CareerShape::from_key(""), CareerShape::Briefcase);
        assert_eq!(CareerShape::from_key("helix"), CareerShape::Helix);
    }
}
