// Host-side tests for the Canvas2D hero simulation.

use glam::Vec2;
use hero_core::constants::{CPU_PARTICLES_WIDE, WRAP_MARGIN};
use hero_core::drift::{budget_for_layout_width, DriftField, DriftParticle};
use hero_core::ViewportState;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_within_margin<H>(field: &DriftField<H>, vp: &ViewportState) {
    for (i, p) in field.particles().iter().enumerate() {
        assert!(
            p.position.x >= -WRAP_MARGIN && p.position.x <= vp.width + WRAP_MARGIN,
            "particle {i} x={} outside [-{WRAP_MARGIN}, {}]",
            p.position.x,
            vp.width + WRAP_MARGIN
        );
        assert!(
            p.position.y >= -WRAP_MARGIN && p.position.y <= vp.height + WRAP_MARGIN,
            "particle {i} y={} outside [-{WRAP_MARGIN}, {}]",
            p.position.y,
            vp.height + WRAP_MARGIN
        );
    }
}

#[test]
fn positions_stay_within_margin_over_many_ticks() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut vp = ViewportState::new(640.0, 360.0);
    let mut field = DriftField::populate(500, &vp, &[0u8, 1, 2], &mut rng);
    for frame in 0..5_000 {
        // sweep the pointer around so scaling paths run too
        let t = frame as f32 * 0.01;
        vp.set_pointer(320.0 + 300.0 * t.cos(), 180.0 + 170.0 * t.sin());
        field.tick(&vp);
        assert_within_margin(&field, &vp);
    }
}

#[test]
fn fast_particles_wrap_to_the_opposite_edge() {
    let p = DriftParticle {
        position: Vec2::new(849.0, -49.0),
        velocity: Vec2::new(3.0, -3.0),
        size: 40.0,
        rotation: 0.0,
        rotation_speed: 0.0,
        opacity: 0.5,
        image: None::<()>,
        hue: 260.0,
        scale: 1.0,
    };
    let mut field = DriftField::from_particles(vec![p]);
    let vp = ViewportState::new(800.0, 600.0);
    field.tick(&vp);
    let moved = field.particles()[0].position;
    assert_eq!(moved, Vec2::new(-WRAP_MARGIN, 600.0 + WRAP_MARGIN));
}

#[test]
fn pointer_enlarges_nearby_particle_to_expected_scale() {
    // 1024x768 with the full wide budget; one particle placed 12 px from the pointer
    let mut rng = StdRng::seed_from_u64(1);
    let mut vp = ViewportState::new(1024.0, 768.0);
    let mut particles = DriftField::populate(CPU_PARTICLES_WIDE - 1, &vp, &[()], &mut rng)
        .particles()
        .to_vec();
    particles.insert(
        0,
        DriftParticle {
            position: Vec2::new(500.0, 384.0),
            velocity: Vec2::new(0.1, -0.1),
            size: 40.0,
            rotation: 0.0,
            rotation_speed: 0.002,
            opacity: 0.6,
            image: Some(()),
            hue: 280.0,
            scale: 1.0,
        },
    );
    let mut field = DriftField::from_particles(particles);
    assert_eq!(field.len(), 1000);

    vp.set_pointer(512.0, 384.0);
    field.tick(&vp);

    let p = &field.particles()[0];
    let expected = 1.0 + (1.0 - 12.0 / 200.0) * 2.0;
    assert!((p.scale - expected).abs() < 1e-5, "scale {} != {}", p.scale, expected);
    assert!((p.scale - 2.88).abs() < 1e-5);
    assert!((p.rendered_size() - 40.0 * 2.88).abs() < 1e-3);
    for p in field.particles() {
        assert!((1.0..=3.0).contains(&p.scale));
    }
}

#[test]
fn resize_applies_to_the_next_tick() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut vp = ViewportState::new(800.0, 600.0);
    let mut field = DriftField::populate(1000, &vp, &[()], &mut rng);
    for _ in 0..100 {
        field.tick(&vp);
    }
    vp.resize(1200.0, 900.0);
    field.tick(&vp);
    assert_within_margin(&field, &vp);

    // shrinking back pulls stragglers in on the very next tick
    for _ in 0..2_000 {
        field.tick(&vp);
    }
    vp.resize(800.0, 600.0);
    field.tick(&vp);
    assert_within_margin(&field, &vp);
}

#[test]
fn particle_count_never_changes() {
    let mut rng = StdRng::seed_from_u64(5);
    let vp = ViewportState::new(375.0, 700.0);
    let n = budget_for_layout_width(vp.width);
    let mut field = DriftField::populate(n, &vp, &["img"], &mut rng);
    let sizes: Vec<f32> = field.particles().iter().map(|p| p.size).collect();
    let alphas: Vec<f32> = field.particles().iter().map(|p| p.opacity).collect();
    for _ in 0..1_000 {
        field.tick(&vp);
        assert_eq!(field.len(), n);
    }
    // size and opacity are creation-time only
    assert!(field.particles().iter().map(|p| p.size).eq(sizes));
    assert!(field.particles().iter().map(|p| p.opacity).eq(alphas));
}
