#![allow(irrefutable_let_patterns)]

pub mod canvas;
pub mod config;
mod error;
pub mod field;
pub mod motion;
mod point_cloud;
mod renderer;
pub mod selector;
pub mod shape;

pub use canvas::{CyclingCanvas, Frame, FrameLoop, FrameTarget, MorphingCanvas, ParticleCanvas};
pub use config::{Behavior, CameraConfig, FieldConfig, MorphParams, RigidParams, SpriteStyle};
pub use error::MountError;
pub use field::ParticleField;
pub use renderer::Renderer;
pub use selector::{Section, SectionSelector, Selection, ShapeCycler};
pub use shape::{ArtifactShape, CareerShape, Shape, ShapeDescriptor};

/// Flat `x, y, z` buffer of a fixed number of particles.
///
/// The backing storage is a boxed slice, so the particle count can never change
/// after construction; regeneration replaces the whole buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionBuffer {
    data: Box<[f32]>,
}

impl PositionBuffer {
    pub fn zeroed(count: usize) -> Self {
        Self {
            data: vec![0.0; count * 3].into_boxed_slice(),
        }
    }

    pub fn from_fn(count: usize, mut fun: impl FnMut(usize) -> glam::Vec3) -> Self {
        let mut buffer = Self::zeroed(count);
        for i in 0..count {
            buffer.set(i, fun(i));
        }
        buffer
    }

    /// Number of particles, i.e. a third of the component count.
    pub fn count(&self) -> usize {
        self.data.len() / 3
    }

    pub fn get(&self, index: usize) -> glam::Vec3 {
        glam::Vec3::from_slice(&self.data[index * 3..index * 3 + 3])
    }

    pub fn set(&mut self, index: usize, point: glam::Vec3) {
        point.write_to_slice(&mut self.data[index * 3..index * 3 + 3]);
    }

    pub fn points(&self) -> impl Iterator<Item = glam::Vec3> + '_ {
        self.data.chunks_exact(3).map(glam::Vec3::from_slice)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Converts a `0xRRGGBB` literal into linear-ish `[0, 1]` components.
pub fn rgb(hex: u32) -> glam::Vec3 {
    glam::Vec3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_keeps_three_components_per_particle() {
        let mut buffer = PositionBuffer::zeroed(5);
        assert_eq!(buffer.as_slice().len(), 15);
        assert_eq!(buffer.count(), 5);

        buffer.set(4, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(&buffer.as_slice()[12..], &[1.0, 2.0, 3.0]);
        assert_eq!(buffer.points().last(), Some(glam::Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(rgb(0xFF0000), glam::Vec3::X);
        assert_eq!(rgb(0x000000), glam::Vec3::ZERO);
        assert!((rgb(0x38bdf8).z - 248.0 / 255.0).abs() < 1e-6);
    }
}
