// Host-side tests for the instanced GPU hero simulation.

use glam::Vec2;
use hero_core::constants::{GPU_OPACITY_MAX, GPU_OPACITY_MIN, GRID_JITTER, HOMING_RATE};
use hero_core::homing::{GridLayout, HomingField, HomingParticle, ParticleInstance};
use hero_core::ViewportState;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn displaced(offset: Vec2, velocity: Vec2) -> HomingParticle {
    let base = Vec2::new(400.0, 300.0);
    HomingParticle {
        position: base + offset,
        base,
        velocity,
        size: 30.0,
        rotation: 0.0,
        rotation_speed: 0.001,
        opacity: 0.3,
    }
}

#[test]
fn spring_pulls_monotonically_home_without_pointer_or_drift() {
    let mut field = HomingField::from_particles(vec![
        displaced(Vec2::new(120.0, -80.0), Vec2::ZERO),
        displaced(Vec2::new(-3.0, 0.5), Vec2::ZERO),
    ]);
    let mut prev: Vec<f32> = field.particles().iter().map(|p| p.offset_from_base()).collect();
    for _ in 0..600 {
        field.tick(None);
        for (p, before) in field.particles().iter().zip(prev.iter_mut()) {
            let now = p.offset_from_base();
            assert!(now <= *before, "offset grew from {before} to {now}");
            *before = now;
        }
    }
    for p in field.particles() {
        assert!(p.offset_from_base() < 1e-3, "still {} away", p.offset_from_base());
    }
}

#[test]
fn drift_keeps_particles_within_a_bounded_offset() {
    let v = Vec2::new(0.15, -0.12);
    let mut field = HomingField::from_particles(vec![displaced(Vec2::ZERO, v)]);
    let bound = v.length() / HOMING_RATE + 1e-3;
    for _ in 0..2_000 {
        field.tick(None);
        assert!(field.particles()[0].offset_from_base() <= bound);
    }
}

#[test]
fn pointer_pushes_then_spring_recovers() {
    let mut field = HomingField::from_particles(vec![displaced(Vec2::ZERO, Vec2::ZERO)]);
    field.tick(Some(Vec2::new(430.0, 300.0)));
    let pushed = field.particles()[0].position;
    assert!(pushed.x < 400.0, "expected a push to the left, got {pushed:?}");
    for _ in 0..400 {
        field.tick(None);
    }
    assert!(field.particles()[0].offset_from_base() < 1e-2);
}

#[test]
fn initial_layout_jitters_within_cells() {
    let mut rng = StdRng::seed_from_u64(99);
    let vp = ViewportState::new(1280.0, 720.0);
    let n = 2_000;
    let field = HomingField::populate(n, &vp, &mut rng);
    let grid = GridLayout::for_viewport(n, vp.width, vp.height);
    let half = grid.cell * GRID_JITTER * 0.5;
    for (i, p) in field.particles().iter().enumerate() {
        let d = (p.base - grid.cell_center(i)).abs();
        assert!(d.x <= half.x + 1e-3 && d.y <= half.y + 1e-3, "particle {i} off-cell by {d:?}");
        assert_eq!(p.position, p.base);
        assert!((GPU_OPACITY_MIN..GPU_OPACITY_MAX).contains(&p.opacity));
    }
}

#[test]
fn instance_buffer_tracks_every_particle() {
    let mut rng = StdRng::seed_from_u64(4);
    let vp = ViewportState::new(800.0, 600.0);
    let mut field = HomingField::populate(10_000, &vp, &mut rng);
    let mut instances: Vec<ParticleInstance> = Vec::new();
    for _ in 0..10 {
        field.tick(Some(Vec2::new(400.0, 300.0)));
        field.write_instances(&mut instances);
        assert_eq!(instances.len(), 10_000);
        assert_eq!(field.len(), 10_000);
    }
    let first = &field.particles()[0];
    assert_eq!(instances[0].position, first.position.to_array());
    assert_eq!(instances[0].rotation, first.rotation);
    assert_eq!(field.opacities().len(), 10_000);
    let bytes: &[u8] = bytemuck::cast_slice(&instances);
    assert_eq!(bytes.len(), 10_000 * 16);
}
