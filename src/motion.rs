//! Per-frame particle update of the morphing canvas.
//!
//! For every particle, in order: pull toward the target while a transition is
//! running, add the constant drift, push away from the pointer, then wrap the
//! coordinates that left the bounding box to the opposite side.

use rand::{Rng as _, RngCore};

use crate::{config::MorphParams, PositionBuffer};

/// Progress of a shape change over a fixed number of frames.
///
/// Progress only decides whether the pull toward the target runs at all. How
/// close the particles actually are is up to the morph rate: with the default
/// 10% per frame the cloud looks settled well before progress reaches 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    elapsed: u32,
    frames: u32,
}

impl Transition {
    pub fn settled() -> Self {
        Self {
            elapsed: 0,
            frames: 0,
        }
    }

    /// A transition that pulls for exactly `frames` frames.
    pub fn started(frames: u32) -> Self {
        Self { elapsed: 0, frames }
    }

    pub fn is_active(&self) -> bool {
        self.elapsed < self.frames
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// From 0 (just requested) to 1 (settled).
    pub fn progress(&self) -> f32 {
        if self.frames == 0 {
            1.0
        } else {
            self.elapsed.min(self.frames) as f32 / self.frames as f32
        }
    }

    fn advance(&mut self) {
        self.elapsed += 1;
    }
}

/// Constant per-particle drift, drawn once per shape.
pub fn random_velocities(count: usize, speed: f32, rng: &mut dyn RngCore) -> PositionBuffer {
    PositionBuffer::from_fn(count, |_| {
        glam::Vec3::new(
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
        ) * (2.0 * speed)
    })
}

/// Displacement of a particle at `offset` from the pointer.
///
/// Zero outside `radius` and growing linearly toward the pointer, so a closer
/// particle is never pushed less than a farther one. A particle sitting exactly
/// on the pointer has no direction to move in and stays put.
pub fn repulsion(offset: glam::Vec3, radius: f32, force: f32) -> glam::Vec3 {
    let distance = offset.length();
    if distance < radius {
        offset.normalize_or_zero() * ((1.0 - distance / radius) * force)
    } else {
        glam::Vec3::ZERO
    }
}

/// Teleports a coordinate that left `[-bound, bound]` to the opposite edge.
pub fn wrap(value: f32, bound: f32) -> f32 {
    if value > bound {
        -bound
    } else if value < -bound {
        bound
    } else {
        value
    }
}

/// Advances every particle by one frame.
///
/// `targets` and `velocities` must hold as many particles as `positions`.
pub fn step(
    positions: &mut PositionBuffer,
    targets: &PositionBuffer,
    velocities: &PositionBuffer,
    transition: &mut Transition,
    pointer: glam::Vec3,
    params: &MorphParams,
) {
    debug_assert_eq!(positions.count(), targets.count());
    debug_assert_eq!(positions.count(), velocities.count());

    let morphing = transition.is_active();
    if morphing {
        transition.advance();
    }

    for i in 0..positions.count() {
        let mut p = positions.get(i);
        if morphing {
            p += (targets.get(i) - p) * params.morph_rate;
        }
        p += velocities.get(i);
        p += repulsion(p - pointer, params.repel_radius, params.repel_force);
        let b = params.bound;
        positions.set(i, glam::Vec3::new(wrap(p.x, b), wrap(p.y, b), wrap(p.z, b)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::POINTER_SENTINEL;

    fn params() -> MorphParams {
        MorphParams {
            transition_frames: 100,
            morph_rate: 0.1,
            drift_speed: 0.0015,
            repel_radius: 2.0,
            repel_force: 0.008,
            bound: 3.0,
        }
    }

    #[test]
    fn wrap_teleports_instead_of_clamping() {
        assert_eq!(wrap(3.001, 3.0), -3.0);
        assert_eq!(wrap(-3.5, 3.0), 3.0);
        assert_eq!(wrap(3.0, 3.0), 3.0);
        assert_eq!(wrap(-0.25, 3.0), -0.25);
    }

    #[test]
    fn transition_only_pulls_while_active() {
        let mut positions = PositionBuffer::zeroed(1);
        let mut targets = PositionBuffer::zeroed(1);
        targets.set(0, glam::Vec3::ONE);
        let velocities = PositionBuffer::zeroed(1);

        let mut transition = Transition::settled();
        step(
            &mut positions,
            &targets,
            &velocities,
            &mut transition,
            POINTER_SENTINEL,
            &params(),
        );
        assert_eq!(positions.get(0), glam::Vec3::ZERO);

        let mut transition = Transition::started(100);
        step(
            &mut positions,
            &targets,
            &velocities,
            &mut transition,
            POINTER_SENTINEL,
            &params(),
        );
        assert!(positions.get(0).abs_diff_eq(glam::Vec3::splat(0.1), 1e-6));
        assert!((transition.progress() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn transition_runs_exactly_its_frame_count() {
        let mut transition = Transition::started(100);
        let mut frames = 0;
        while transition.is_active() {
            transition.advance();
            frames += 1;
        }
        assert_eq!(frames, 100);
        assert_eq!(transition.progress(), 1.0);
        assert!(!Transition::settled().is_active());
    }

    #[test]
    fn drift_stays_within_speed() {
        let mut rng = rand::rngs::mock::StepRng::new(0, u64::MAX / 7);
        let velocities = random_velocities(100, 0.0015, &mut rng);
        assert!(velocities
            .as_slice()
            .iter()
            .all(|v| v.abs() <= 0.0015 + 1e-7));
    }

    #[test]
    fn repulsion_points_away_from_pointer() {
        let push = repulsion(glam::Vec3::new(0.5, 0.0, 0.0), 2.0, 0.008);
        assert!(push.x > 0.0);
        assert_eq!(push.y, 0.0);
        assert_eq!(repulsion(glam::Vec3::new(2.0, 0.0, 0.0), 2.0, 0.008), glam::Vec3::ZERO);
        assert_eq!(repulsion(glam::Vec3::ZERO, 2.0, 0.008), glam::Vec3::ZERO);
    }
}
