use rand::{Rng as _, RngCore};
use std::f32::consts::PI;

use super::{angle, centered, polyline, star_vertices, Shape, ShapeDescriptor};
use crate::PositionBuffer;

const COLOR: u32 = 0x38bdf8;

/// Shapes cycled through by clicking on the artifact canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactShape {
    GizaPyramid,
    EyeOfHorus,
    Obelisk,
    Stonehenge,
    MayanPyramid,
    Pentagram,
    Hexagram,
    CelticKnot,
    Ankh,
    Ouroboros,
    Polaris,
    AssassinsCreed,
    GameOfThrones,
    Dragon,
    Bird,
    Torus,
    Infinity,
    InfinityCube,
}

macro_rules! descriptor {
    ($key:literal, $name:literal, $fun:ident) => {
        ShapeDescriptor {
            key: $key,
            name: $name,
            color: COLOR,
            generator: $fun,
        }
    };
}

static DESCRIPTORS: [ShapeDescriptor; 18] = [
    descriptor!("giza_pyramid", "Giza Pyramid", giza_pyramid),
    descriptor!("eye_of_horus", "Eye of Horus", eye_of_horus),
    descriptor!("obelisk", "Obelisk", obelisk),
    descriptor!("stonehenge", "Stonehenge", stonehenge),
    descriptor!("mayan_pyramid", "Mayan Pyramid", mayan_pyramid),
    descriptor!("pentagram", "Pentagram", pentagram),
    descriptor!("hexagram", "Hexagram", hexagram),
    descriptor!("celtic_knot", "Celtic Knot", celtic_knot),
    descriptor!("ankh", "Ankh", ankh),
    descriptor!("ouroboros", "Ouroboros", ouroboros),
    descriptor!("polaris", "Polaris", polaris),
    descriptor!("assassins_creed", "Assassin's Creed", assassins_creed),
    descriptor!("got", "Game of Thrones", game_of_thrones),
    descriptor!("dragon", "Dragon", dragon),
    descriptor!("bird", "Bird", bird),
    descriptor!("torus", "Torus", torus),
    descriptor!("infinity", "Infinity", infinity),
    descriptor!("infinity_cube", "Infinity Cube", infinity_cube),
];

impl Shape for ArtifactShape {
    const ALL: &'static [Self] = &[
        Self::GizaPyramid,
        Self::EyeOfHorus,
        Self::Obelisk,
        Self::Stonehenge,
        Self::MayanPyramid,
        Self::Pentagram,
        Self::Hexagram,
        Self::CelticKnot,
        Self::Ankh,
        Self::Ouroboros,
        Self::Polaris,
        Self::AssassinsCreed,
        Self::GameOfThrones,
        Self::Dragon,
        Self::Bird,
        Self::Torus,
        Self::Infinity,
        Self::InfinityCube,
    ];
    const DEFAULT: Self = Self::Polaris;

    fn descriptor(self) -> &'static ShapeDescriptor {
        &DESCRIPTORS[self as usize]
    }
}

fn cube_noise(rng: &mut dyn RngCore, extent: f32) -> glam::Vec3 {
    glam::Vec3::new(centered(rng), centered(rng), centered(rng)) * extent
}

// Ancient

fn giza_pyramid(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        // 70% pyramid body, the rest ambient dust.
        if rng.gen::<f32>() >= 0.7 {
            return cube_noise(rng, scale * 2.5);
        }
        let u = centered(rng);
        let v = centered(rng);
        let height = rng.gen::<f32>();
        let point = if u.abs() + v.abs() < 0.5 * (1.0 - height) {
            glam::Vec3::new(u, height - 0.5, v)
        } else {
            cube_noise(rng, 1.0)
        };
        point * scale
    })
}

fn eye_of_horus(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        let t = angle(rng);
        let r = 0.3 + 0.7 * rng.gen::<f32>();
        let a = t + (t * 2.0).sin() * 0.5;
        glam::Vec3::new(
            a.cos() * r * scale,
            a.sin() * r * scale * 0.6,
            centered(rng) * 0.1 * scale,
        )
    })
}

fn obelisk(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    let height = scale * 2.0;
    let width = scale * 0.2;
    PositionBuffer::from_fn(count, |_| {
        glam::Vec3::new(
            centered(rng) * width,
            centered(rng) * height,
            centered(rng) * width,
        )
    })
}

fn stonehenge(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    const STONES: usize = 8;
    PositionBuffer::from_fn(count, |i| {
        let a = (i % STONES) as f32 * 2.0 * PI / STONES as f32;
        glam::Vec3::new(
            a.cos() * scale + centered(rng) * 0.1,
            rng.gen::<f32>() * scale * 0.5,
            a.sin() * scale + centered(rng) * 0.1,
        )
    })
}

fn mayan_pyramid(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    const LEVELS: u32 = 5;
    PositionBuffer::from_fn(count, |_| {
        let level = rng.gen_range(0..LEVELS);
        let level_scale = (LEVELS - level) as f32 / LEVELS as f32;
        glam::Vec3::new(
            centered(rng) * level_scale * scale,
            level as f32 * scale / LEVELS as f32 - scale / 2.0,
            centered(rng) * level_scale * scale,
        )
    })
}

// Mystical

fn pentagram(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    let vertices = star_vertices([0, 2, 4, 1, 3, 0], 2.0 * PI / 5.0);
    PositionBuffer::from_fn(count, |_| {
        let p = polyline(rng, &vertices) * scale;
        p.extend(centered(rng) * 0.1 * scale)
    })
}

fn hexagram(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    let up = star_vertices([0, 2, 4, 0], PI / 3.0);
    let down = star_vertices([1, 3, 5, 1], PI / 3.0);
    PositionBuffer::from_fn(count, |_| {
        let triangle = if rng.gen::<f32>() < 0.5 { &up } else { &down };
        let p = polyline(rng, triangle) * scale;
        p.extend(centered(rng) * 0.1 * scale)
    })
}

fn celtic_knot(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        let t = rng.gen::<f32>() * 4.0 * PI;
        glam::Vec3::new(
            t.sin() * t.cos() * scale,
            (t * 0.5).sin() * scale,
            t.cos() * 0.1 * scale,
        )
    })
}

fn ankh(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        let zone = rng.gen::<f32>();
        if zone < 0.3 {
            // loop
            let a = angle(rng);
            let r = scale * 0.3;
            glam::Vec3::new(
                a.cos() * r,
                scale * 0.5 + a.sin() * r,
                centered(rng) * 0.05 * scale,
            )
        } else if zone < 0.6 {
            // stem
            glam::Vec3::new(
                centered(rng) * 0.1 * scale,
                centered(rng) * scale,
                centered(rng) * 0.05 * scale,
            )
        } else {
            // crossbar
            glam::Vec3::new(centered(rng) * scale * 0.5, 0.0, centered(rng) * 0.05 * scale)
        }
    })
}

fn ouroboros(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        let a = angle(rng);
        let radius = scale * 0.5 + (a * 3.0).sin() * 0.1 * scale;
        glam::Vec3::new(a.cos() * radius, a.sin() * radius, centered(rng) * 0.05 * scale)
    })
}

// Cosmic

fn polaris(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    let spiral = count * 8 / 10;
    PositionBuffer::from_fn(count, |i| {
        if i >= spiral {
            return cube_noise(rng, scale * 2.0);
        }
        let r = i as f32 / spiral as f32 * scale;
        let a = i as f32 * 0.1;
        glam::Vec3::new(r * a.cos(), r * a.sin(), centered(rng) * scale * 0.1)
    })
}

// Fictional

fn assassins_creed(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        if rng.gen::<f32>() < 0.4 {
            // hood
            let a = rng.gen::<f32>() * PI;
            let r = a.sin() * scale * 0.8;
            glam::Vec3::new(
                (a * 2.0).cos() * r,
                a.cos() * scale,
                centered(rng) * 0.1 * scale,
            )
        } else {
            // cape
            glam::Vec3::new(
                centered(rng) * scale * 1.2,
                (rng.gen::<f32>() - 1.0) * scale,
                centered(rng) * 0.2 * scale,
            )
        }
    })
}

fn game_of_thrones(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    const SPIKES: u32 = 8;
    PositionBuffer::from_fn(count, |_| {
        if rng.gen::<f32>() < 0.3 {
            let a = rng.gen_range(0..SPIKES) as f32 / SPIKES as f32 * 2.0 * PI;
            let height = 0.5 + rng.gen::<f32>() * 0.5;
            glam::Vec3::new(a.cos() * scale * 0.7, height * scale, a.sin() * scale * 0.7)
        } else {
            let a = angle(rng);
            let r = scale * 0.8;
            glam::Vec3::new(a.cos() * r, centered(rng) * scale * 0.5, a.sin() * r)
        }
    })
}

fn dragon(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        let zone = rng.gen::<f32>();
        if zone < 0.3 {
            let wing = rng.gen::<f32>() * PI;
            glam::Vec3::new(
                wing.cos() * scale * (1.0 + wing.sin()),
                wing.sin() * scale * 0.5,
                centered(rng) * scale * 0.3,
            )
        } else if zone < 0.7 {
            let t = rng.gen::<f32>();
            glam::Vec3::new(
                (t - 0.5) * scale * 2.0,
                (t * PI).sin() * scale * 0.3,
                centered(rng) * scale * 0.4,
            )
        } else {
            let t = rng.gen::<f32>() * 2.0;
            glam::Vec3::new(
                -scale + t * scale * 0.5,
                (t * PI).sin() * scale * 0.2,
                (t * PI).cos() * scale * 0.2,
            )
        }
    })
}

fn bird(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        if rng.gen::<f32>() < 0.6 {
            let span = rng.gen::<f32>() * PI;
            glam::Vec3::new(
                span.cos() * scale,
                span.sin() * scale * 0.3,
                centered(rng) * scale * 0.1,
            )
        } else {
            glam::Vec3::new(
                centered(rng) * scale * 0.3,
                centered(rng) * scale * 0.5,
                centered(rng) * scale * 0.2,
            )
        }
    })
}

// Geometric

fn torus(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    let major = scale * 0.6;
    let minor = scale * 0.3;
    PositionBuffer::from_fn(count, |_| {
        let u = angle(rng);
        let v = angle(rng);
        let ring = major + minor * v.cos();
        glam::Vec3::new(ring * u.cos(), ring * u.sin(), minor * v.sin())
    })
}

/// Lemniscate of Bernoulli with a little depth jitter.
fn infinity(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        let (sin, cos) = angle(rng).sin_cos();
        let denom = 1.0 + sin * sin;
        glam::Vec3::new(
            scale * cos / denom,
            scale * sin * cos / denom,
            centered(rng) * scale * 0.1,
        )
    })
}

fn infinity_cube(count: usize, scale: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        if rng.gen::<f32>() >= 0.8 {
            return cube_noise(rng, scale * 2.0);
        }
        let edge = rng.gen_range(0..12u32);
        let s = centered(rng) * 2.0 * scale;
        let side = |positive: bool| if positive { scale } else { -scale };
        match edge {
            0..=3 => glam::Vec3::new(
                if edge % 2 == 0 { s } else { side(edge == 1) },
                -scale,
                side(edge < 2),
            ),
            4..=7 => glam::Vec3::new(
                if edge % 2 == 0 { s } else { side(edge == 5) },
                scale,
                side(edge < 6),
            ),
            _ => glam::Vec3::new(
                side(edge == 8 || edge == 11),
                s,
                side(edge == 8 || edge == 9),
            ),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;

    #[test]
    fn descriptors_follow_enum_order() {
        for (index, &shape) in ArtifactShape::ALL.iter().enumerate() {
            assert_eq!(shape as usize, index);
        }
        assert_eq!(ArtifactShape::GameOfThrones.key(), "got");
        assert_eq!(ArtifactShape::AssassinsCreed.descriptor().name, "Assassin's Creed");
    }

    #[test]
    fn pyramid_body_share_converges() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let count = 20_000;
        let points = giza_pyramid(count, 1.0, &mut rng);
        // The body fills the half-unit box; dust lands there with odds (1/2.5)³.
        let inside = points
            .points()
            .filter(|p| p.abs().max_element() <= 0.5)
            .count();
        let share = inside as f64 / count as f64;
        let expected = 0.7 + 0.3 * 0.4f64.powi(3);
        assert!((share - expected).abs() < 0.02, "body share {}", share);
    }

    #[test]
    fn stonehenge_uses_eight_pillars() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(12);
        let points = stonehenge(64, 1.0, &mut rng);
        for (i, p) in points.points().enumerate() {
            let a = (i % 8) as f32 * PI / 4.0;
            assert!((p.x - a.cos()).abs() <= 0.05 + 1e-6);
            assert!((p.z - a.sin()).abs() <= 0.05 + 1e-6);
        }
    }
}
