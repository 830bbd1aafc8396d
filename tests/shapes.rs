//! Statistical and structural checks of the shape generators.

mod support;

use blade_particles::{ArtifactShape, CareerShape, Shape};
use std::collections::BTreeSet;

fn check_buffers<S: Shape>(count: usize, scale: f32) {
    for seed in 0..3 {
        let mut rng = support::seeded(seed);
        for &shape in S::ALL {
            let points = shape.generate(count, scale, &mut rng);
            assert_eq!(
                points.as_slice().len(),
                count * 3,
                "{:?} returned a short buffer",
                shape
            );
            assert!(
                points.as_slice().iter().all(|v| v.is_finite()),
                "{:?} produced a non-finite coordinate (seed {})",
                shape,
                seed
            );
        }
    }
}

#[test]
fn test_artifact_buffers_are_complete_and_finite() {
    check_buffers::<ArtifactShape>(8000, 1.2);
    check_buffers::<ArtifactShape>(333, 0.5);
}

#[test]
fn test_career_buffers_are_complete_and_finite() {
    check_buffers::<CareerShape>(4000, 4.0);
    check_buffers::<CareerShape>(1, 7.5);
}

/// Kolmogorov-Smirnov distance between samples and the uniform law on `[0, 1]`.
fn ks_uniform(mut samples: Vec<f64>) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = samples.len() as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let below = v - i as f64 / n;
            let above = (i + 1) as f64 / n - v;
            below.max(above)
        })
        .fold(0.0, f64::max)
}

#[test]
fn test_sphere_density_is_uniform_in_volume() {
    let mut rng = support::seeded(42);
    let scale = 2.0;
    let points = CareerShape::Sphere.generate(10_000, scale, &mut rng);
    let radius = scale as f64 / 2.0;

    // For a uniform ball, (r / R)³ is uniform on [0, 1].
    let cubes = points
        .points()
        .map(|p| (p.length() as f64 / radius).powi(3))
        .collect::<Vec<_>>();
    assert!(cubes.iter().all(|&c| c <= 1.0 + 1e-4));

    let distance = ks_uniform(cubes);
    assert!(distance < 0.025, "KS distance {} too large", distance);
}

#[test]
fn test_lattice_cube_sits_on_regular_grid() {
    let mut rng = support::seeded(0);
    let scale = 4.0;
    let points = CareerShape::Cube.generate(1000, scale, &mut rng);
    let spacing = scale / 10.0;

    for axis in 0..3 {
        let steps = points
            .points()
            .map(|p| {
                let step = p[axis] / spacing;
                assert!(
                    (step - step.round()).abs() < 1e-4,
                    "{} is off the grid",
                    p[axis]
                );
                step.round() as i32
            })
            .collect::<BTreeSet<_>>();
        assert_eq!(steps.len(), 10, "axis {} has {:?}", axis, steps);
    }

    let distinct = points
        .points()
        .map(|p| (p / spacing).round().as_ivec3().to_array())
        .collect::<BTreeSet<_>>();
    assert_eq!(distinct.len(), 1000);
}

#[test]
fn test_zone_proportions_converge() {
    let mut rng = support::seeded(9);
    let count = 20_000;
    let points = ArtifactShape::Ankh.generate(count, 1.0, &mut rng);
    // The crossbar zone (draws above 0.6) is the only one flattened to y = 0.
    let crossbar = points.points().filter(|p| p.y == 0.0).count();
    let share = crossbar as f64 / count as f64;
    assert!((share - 0.4).abs() < 0.02, "crossbar share {}", share);
}

#[test]
fn test_star_polygons_stay_on_their_outline() {
    let mut rng = support::seeded(5);
    let points = ArtifactShape::Pentagram.generate(2000, 1.0, &mut rng);
    // Each edge skips a vertex, so its chord passes cos(2π/5) from the center.
    let inner = (2.0 * std::f32::consts::PI / 5.0).cos();
    for p in points.points() {
        let radius = p.truncate().length();
        assert!(radius <= 1.0 + 1e-5);
        assert!(radius >= inner.abs() - 1e-5);
        assert!(p.z.abs() <= 0.05 + 1e-6);
    }
}

#[test]
fn test_generators_are_deterministic_for_a_seed() {
    for &shape in CareerShape::ALL {
        let a = shape.generate(100, 4.0, &mut support::seeded(77));
        let b = shape.generate(100, 4.0, &mut support::seeded(77));
        assert_eq!(a, b, "{:?}", shape);
    }
}
