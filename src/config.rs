//! Fixed parameters of the two particle canvases.

use std::{f32::consts::FRAC_PI_4, time::Duration};

/// Far-away pointer position that no particle can be repelled by.
pub const POINTER_SENTINEL: glam::Vec3 = glam::Vec3::new(1000.0, 1000.0, 0.0);

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view, in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Distance along +Z, looking at the origin.
    pub distance: f32,
}

impl CameraConfig {
    pub fn projection_matrix(&self, aspect: f32) -> glam::Mat4 {
        glam::Mat4::perspective_rh(self.fov_y.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> glam::Mat4 {
        glam::Mat4::look_at_rh(
            glam::Vec3::new(0.0, 0.0, self.distance),
            glam::Vec3::ZERO,
            glam::Vec3::Y,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpriteStyle {
    /// Apparent sprite size, in the same units as a perspective-attenuated point size.
    pub size: f32,
    pub opacity: f32,
    /// Circular sprites instead of squares.
    pub round: bool,
    /// Additive instead of alpha blending.
    pub additive: bool,
}

/// Whole-cloud rotation that lags behind the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct RigidParams {
    pub damping: f32,
    pub pointer_gain: f32,
    /// Fixed roll about Z applied on top of the pointer rotation.
    pub tilt: f32,
}

/// Per-particle morph, drift, repulsion and wraparound.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphParams {
    pub transition_frames: u32,
    /// Fraction of the remaining distance covered per transition frame.
    pub morph_rate: f32,
    /// Maximum absolute drift per axis per frame.
    pub drift_speed: f32,
    pub repel_radius: f32,
    pub repel_force: f32,
    /// Half-extent of the wraparound box.
    pub bound: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Behavior {
    Rigid(RigidParams),
    Morph(MorphParams),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Scale handed to the shape generators.
    pub scale: f32,
    /// Canvas size in pixels.
    pub width: u32,
    pub height: u32,
    pub camera: CameraConfig,
    pub sprite: SpriteStyle,
    pub behavior: Behavior,
    /// Cool-down between accepted clicks on a cycling canvas.
    pub click_cooldown: Duration,
}

impl FieldConfig {
    /// Artifact canvas: 8000 particles rotating toward the pointer, click to cycle.
    pub fn cycling() -> Self {
        Self {
            particle_count: 8000,
            scale: 1.2,
            width: 550,
            height: 550,
            camera: CameraConfig {
                fov_y: 75.0,
                near: 0.1,
                far: 1000.0,
                distance: 3.0,
            },
            sprite: SpriteStyle {
                size: 0.015,
                opacity: 0.8,
                round: false,
                additive: false,
            },
            behavior: Behavior::Rigid(RigidParams {
                damping: 0.05,
                pointer_gain: 0.8,
                tilt: FRAC_PI_4,
            }),
            click_cooldown: Duration::from_millis(1000),
        }
    }

    /// Career canvas: 4000 drifting particles morphing between shapes.
    pub fn morphing() -> Self {
        Self {
            particle_count: 4000,
            scale: 4.0,
            width: 400,
            height: 400,
            camera: CameraConfig {
                fov_y: 75.0,
                near: 0.1,
                far: 1000.0,
                distance: 4.0,
            },
            sprite: SpriteStyle {
                size: 0.06,
                opacity: 0.7,
                round: true,
                additive: true,
            },
            behavior: Behavior::Morph(MorphParams {
                transition_frames: 100,
                morph_rate: 0.1,
                drift_speed: 0.0015,
                repel_radius: 2.0,
                repel_force: 0.008,
                bound: 3.0,
            }),
            click_cooldown: Duration::from_millis(1000),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_looks_down_negative_z() {
        let camera = FieldConfig::morphing().camera;
        let origin = camera.view_matrix().transform_point3(glam::Vec3::ZERO);
        assert!(origin.abs_diff_eq(glam::Vec3::new(0.0, 0.0, -4.0), 1e-6));
    }

    #[test]
    fn morphing_preset_transitions_over_100_frames() {
        let Behavior::Morph(params) = FieldConfig::morphing().behavior else {
            panic!("morphing preset must morph");
        };
        assert_eq!(params.transition_frames, 100);
    }
}
