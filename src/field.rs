use rand::RngCore;

use crate::{
    config::{Behavior, FieldConfig, MorphParams, RigidParams, POINTER_SENTINEL},
    motion::{self, Transition},
    shape::Shape,
    PositionBuffer,
};

enum Dynamics {
    /// The cloud turns as a whole toward the pointer.
    Rigid {
        params: RigidParams,
        target: glam::Vec2,
        rotation: glam::Vec2,
    },
    /// Particles drift, dodge the pointer and morph between shapes.
    Morph {
        params: MorphParams,
        targets: PositionBuffer,
        velocities: PositionBuffer,
        transition: Transition,
        pointer: glam::Vec3,
    },
}

/// Simulation state of one particle canvas.
///
/// The particle count is fixed at construction; shape changes only ever
/// replace buffer contents.
pub struct ParticleField<S: Shape> {
    shape: S,
    scale: f32,
    positions: PositionBuffer,
    dynamics: Dynamics,
}

impl<S: Shape> ParticleField<S> {
    /// Builds the cloud directly in `shape`, without a transition.
    pub fn new(config: &FieldConfig, shape: S, rng: &mut dyn RngCore) -> Self {
        let count = config.particle_count;
        let positions = shape.generate(count, config.scale, rng);
        let dynamics = match config.behavior {
            Behavior::Rigid(ref params) => Dynamics::Rigid {
                params: params.clone(),
                target: glam::Vec2::ZERO,
                rotation: glam::Vec2::ZERO,
            },
            Behavior::Morph(ref params) => Dynamics::Morph {
                targets: positions.clone(),
                velocities: motion::random_velocities(count, params.drift_speed, rng),
                transition: Transition::settled(),
                pointer: POINTER_SENTINEL,
                params: params.clone(),
            },
        };
        Self {
            shape,
            scale: config.scale,
            positions,
            dynamics,
        }
    }

    pub fn shape(&self) -> S {
        self.shape
    }

    pub fn count(&self) -> usize {
        self.positions.count()
    }

    /// Switches to `shape`, returning `false` if it is already displayed.
    ///
    /// A rigid cloud swaps its geometry at once. A morphing cloud keeps the
    /// current positions, gets fresh targets and drift, and restarts its
    /// transition.
    pub fn set_shape(&mut self, shape: S, rng: &mut dyn RngCore) -> bool {
        if shape == self.shape {
            return false;
        }
        log::debug!("Shape {:?} -> {:?}", self.shape, shape);
        self.shape = shape;
        let generated = shape.generate(self.positions.count(), self.scale, rng);
        match self.dynamics {
            Dynamics::Rigid { .. } => {
                self.positions = generated;
            }
            Dynamics::Morph {
                ref params,
                ref mut targets,
                ref mut velocities,
                ref mut transition,
                ..
            } => {
                *targets = generated;
                *velocities =
                    motion::random_velocities(targets.count(), params.drift_speed, rng);
                *transition = Transition::started(params.transition_frames);
            }
        }
        true
    }

    /// Pointer position in normalized device coordinates, `[-1, 1]` with +Y up.
    pub fn pointer_moved(&mut self, ndc: glam::Vec2) {
        match self.dynamics {
            Dynamics::Rigid {
                ref params,
                ref mut target,
                ..
            } => {
                *target = glam::Vec2::new(ndc.y, ndc.x) * params.pointer_gain;
            }
            Dynamics::Morph {
                ref params,
                ref mut pointer,
                ..
            } => {
                *pointer = (ndc * params.bound).extend(0.0);
            }
        }
    }

    /// Disables repulsion. A rigid cloud keeps heading for its last target.
    pub fn pointer_left(&mut self) {
        if let Dynamics::Morph {
            ref mut pointer, ..
        } = self.dynamics
        {
            *pointer = POINTER_SENTINEL;
        }
    }

    /// Advances the simulation by one display frame.
    pub fn tick(&mut self) {
        match self.dynamics {
            Dynamics::Rigid {
                ref params,
                target,
                ref mut rotation,
            } => {
                *rotation += (target - *rotation) * params.damping;
            }
            Dynamics::Morph {
                ref params,
                ref targets,
                ref velocities,
                ref mut transition,
                pointer,
            } => {
                motion::step(
                    &mut self.positions,
                    targets,
                    velocities,
                    transition,
                    pointer,
                    params,
                );
            }
        }
    }

    pub fn positions(&self) -> &PositionBuffer {
        &self.positions
    }

    /// Target layout of a morphing cloud.
    pub fn targets(&self) -> Option<&PositionBuffer> {
        match self.dynamics {
            Dynamics::Rigid { .. } => None,
            Dynamics::Morph { ref targets, .. } => Some(targets),
        }
    }

    pub fn transition(&self) -> Option<Transition> {
        match self.dynamics {
            Dynamics::Rigid { .. } => None,
            Dynamics::Morph { transition, .. } => Some(transition),
        }
    }

    /// Pointer in cloud space; the sentinel when repulsion is off.
    pub fn pointer(&self) -> Option<glam::Vec3> {
        match self.dynamics {
            Dynamics::Rigid { .. } => None,
            Dynamics::Morph { pointer, .. } => Some(pointer),
        }
    }

    /// Current rotation about X and Y of a rigid cloud.
    pub fn rotation(&self) -> glam::Vec2 {
        match self.dynamics {
            Dynamics::Rigid { rotation, .. } => rotation,
            Dynamics::Morph { .. } => glam::Vec2::ZERO,
        }
    }

    pub fn model_matrix(&self) -> glam::Mat4 {
        match self.dynamics {
            Dynamics::Rigid {
                ref params,
                rotation,
                ..
            } => glam::Mat4::from_euler(glam::EulerRot::XYZ, rotation.x, rotation.y, params.tilt),
            Dynamics::Morph { .. } => glam::Mat4::IDENTITY,
        }
    }

    pub fn color(&self) -> glam::Vec3 {
        crate::rgb(self.shape.descriptor().color)
    }
}
