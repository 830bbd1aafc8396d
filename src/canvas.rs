//! Mount/frame/unmount lifecycle of a particle canvas.

use rand::RngCore;
use std::time::Instant;

use crate::{
    config::FieldConfig,
    field::ParticleField,
    selector::{SectionSelector, Selection, ShapeCycler},
    shape::{ArtifactShape, CareerShape, Shape},
    MountError,
};

/// Everything a target needs to present one frame.
pub struct Frame<'a> {
    /// Flat `x, y, z` positions in cloud space.
    pub positions: &'a [f32],
    pub model: glam::Mat4,
    pub color: glam::Vec3,
}

/// Drawing surface of a canvas. Dropping it releases every resource it owns.
pub trait FrameTarget {
    fn draw(&mut self, frame: &Frame);
}

/// Scheduling state of the per-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameLoop {
    Running,
    /// Mounting failed; nothing is ever drawn.
    Blank,
    Cancelled,
}

pub struct ParticleCanvas<S: Shape, T: FrameTarget> {
    field: ParticleField<S>,
    target: Option<T>,
    frame_loop: FrameLoop,
    width: u32,
    height: u32,
    rng: Box<dyn RngCore>,
}

impl<S: Shape, T: FrameTarget> ParticleCanvas<S, T> {
    /// Builds the field in `shape` and acquires a drawing target for it.
    ///
    /// A failing `acquire` leaves the canvas blank instead of reporting an
    /// error: the animation is decorative and the page must keep rendering.
    pub fn mount(
        config: &FieldConfig,
        shape: S,
        mut rng: Box<dyn RngCore>,
        acquire: impl FnOnce(&FieldConfig) -> Result<T, MountError>,
    ) -> Self {
        let field = ParticleField::new(config, shape, rng.as_mut());
        let (target, frame_loop) = match acquire(config) {
            Ok(target) => (Some(target), FrameLoop::Running),
            Err(e) => {
                log::warn!("Particle canvas left blank: {}", e);
                (None, FrameLoop::Blank)
            }
        };
        Self {
            field,
            target,
            frame_loop,
            width: config.width,
            height: config.height,
            rng,
        }
    }

    pub fn field(&self) -> &ParticleField<S> {
        &self.field
    }

    pub fn frame_loop(&self) -> FrameLoop {
        self.frame_loop
    }

    pub fn shape(&self) -> S {
        self.field.shape()
    }

    /// Takes effect from the next frame on.
    pub fn set_shape(&mut self, shape: S) -> bool {
        self.field.set_shape(shape, self.rng.as_mut())
    }

    /// Pointer position in pixels relative to the canvas' top-left corner.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let ndc = glam::Vec2::new(
            x / self.width as f32 * 2.0 - 1.0,
            1.0 - y / self.height as f32 * 2.0,
        );
        self.field.pointer_moved(ndc);
    }

    pub fn pointer_left(&mut self) {
        self.field.pointer_left();
    }

    /// Runs one display frame. Returns whether another frame should be scheduled.
    pub fn frame(&mut self) -> bool {
        if self.frame_loop != FrameLoop::Running {
            return false;
        }
        self.field.tick();
        if let Some(ref mut target) = self.target {
            target.draw(&Frame {
                positions: self.field.positions().as_slice(),
                model: self.field.model_matrix(),
                color: self.field.color(),
            });
        }
        true
    }

    /// Stops the frame loop and releases the target. Safe to call repeatedly,
    /// and after a failed mount.
    pub fn unmount(&mut self) {
        if self.frame_loop == FrameLoop::Running {
            self.frame_loop = FrameLoop::Cancelled;
        }
        if self.target.take().is_some() {
            log::info!("Particle canvas unmounted");
        }
    }
}

impl<S: Shape, T: FrameTarget> Drop for ParticleCanvas<S, T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Artifact canvas: a click shows the next shape.
pub struct CyclingCanvas<T: FrameTarget> {
    canvas: ParticleCanvas<ArtifactShape, T>,
    cycler: ShapeCycler<ArtifactShape>,
}

impl<T: FrameTarget> CyclingCanvas<T> {
    pub fn mount(
        config: &FieldConfig,
        rng: Box<dyn RngCore>,
        acquire: impl FnOnce(&FieldConfig) -> Result<T, MountError>,
    ) -> Self {
        let cycler = ShapeCycler::new(config.click_cooldown);
        Self {
            canvas: ParticleCanvas::mount(config, cycler.current(), rng, acquire),
            cycler,
        }
    }

    pub fn click(&mut self, now: Instant) -> Option<ArtifactShape> {
        let shape = self.cycler.click(now)?;
        self.canvas.set_shape(shape);
        Some(shape)
    }

    pub fn shape_index(&self) -> usize {
        self.cycler.index()
    }

    pub fn canvas(&self) -> &ParticleCanvas<ArtifactShape, T> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut ParticleCanvas<ArtifactShape, T> {
        &mut self.canvas
    }
}

/// Career canvas: the page's hover and section state picks the shape.
pub struct MorphingCanvas<T: FrameTarget> {
    canvas: ParticleCanvas<CareerShape, T>,
    selector: SectionSelector,
}

impl<T: FrameTarget> MorphingCanvas<T> {
    pub fn mount(
        config: &FieldConfig,
        selection: &Selection,
        rng: Box<dyn RngCore>,
        acquire: impl FnOnce(&FieldConfig) -> Result<T, MountError>,
    ) -> Self {
        let shape = SectionSelector::resolve(selection);
        let mut selector = SectionSelector::default();
        selector.mark_rendered(shape);
        Self {
            canvas: ParticleCanvas::mount(config, shape, rng, acquire),
            selector,
        }
    }

    /// Applies the current selection, then runs one display frame.
    pub fn frame(&mut self, selection: &Selection) -> bool {
        if let Some(shape) = self.selector.update(selection) {
            self.canvas.set_shape(shape);
        }
        self.canvas.frame()
    }

    pub fn canvas(&self) -> &ParticleCanvas<CareerShape, T> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut ParticleCanvas<CareerShape, T> {
        &mut self.canvas
    }
}
