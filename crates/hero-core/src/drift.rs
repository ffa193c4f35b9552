//! Free-drifting image particles for the Canvas2D hero.
//!
//! Particles drift at a constant velocity, wrap around the viewport edges
//! with a margin, spin, and swell when the pointer comes near.

use crate::constants::*;
use crate::viewport::ViewportState;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct DriftParticle<H> {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
    /// Shared image from the pool; `None` draws a tinted circle instead.
    pub image: Option<H>,
    pub hue: f32,
    /// Pointer-proximity multiplier from the last tick, in `[1, 3]`.
    pub scale: f32,
}

impl<H> DriftParticle<H> {
    #[inline]
    pub fn rendered_size(&self) -> f32 {
        self.size * self.scale
    }

    #[inline]
    pub fn draw_alpha(&self, reduced: bool) -> f32 {
        if reduced {
            self.opacity * REDUCED_ALPHA_FACTOR
        } else {
            self.opacity
        }
    }
}

/// Particle budget for a layout width in CSS pixels.
#[inline]
pub fn budget_for_layout_width(width: f32) -> usize {
    if width < NARROW_LAYOUT_WIDTH {
        CPU_PARTICLES_NARROW
    } else {
        CPU_PARTICLES_WIDE
    }
}

/// 3× at the pointer, easing linearly to 1× at [`ENLARGE_RADIUS`].
#[inline]
pub fn enlargement_scale(position: Vec2, pointer: Option<Vec2>) -> f32 {
    let Some(pointer) = pointer else {
        return 1.0;
    };
    let dist = position.distance(pointer);
    if dist < ENLARGE_RADIUS {
        let proximity = 1.0 - dist / ENLARGE_RADIUS;
        (1.0 + proximity * ENLARGE_GAIN).clamp(1.0, MAX_ENLARGE_SCALE)
    } else {
        1.0
    }
}

/// Teleport a coordinate that left `[-margin, extent + margin]` to the
/// opposite edge.
#[inline]
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if value > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        value
    }
}

pub struct DriftField<H> {
    particles: Vec<DriftParticle<H>>,
    reduced: bool,
}

impl<H: Clone> DriftField<H> {
    /// Scatter `count` particles over the viewport, each taking a random
    /// handle from `pool` (the pool is only read here).
    pub fn populate<R: Rng + ?Sized>(
        count: usize,
        viewport: &ViewportState,
        pool: &[H],
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| {
                let image = if pool.is_empty() {
                    None
                } else {
                    Some(pool[rng.gen_range(0..pool.len())].clone())
                };
                DriftParticle {
                    position: Vec2::new(
                        rng.gen::<f32>() * viewport.width,
                        rng.gen::<f32>() * viewport.height,
                    ),
                    velocity: Vec2::new(
                        rng.gen_range(-CPU_DRIFT_MAX..CPU_DRIFT_MAX),
                        rng.gen_range(-CPU_DRIFT_MAX..CPU_DRIFT_MAX),
                    ),
                    size: rng.gen_range(CPU_SIZE_MIN..CPU_SIZE_MAX),
                    rotation: rng.gen::<f32>() * TAU,
                    rotation_speed: rng.gen_range(-CPU_SPIN_MAX..CPU_SPIN_MAX),
                    opacity: rng.gen_range(CPU_OPACITY_MIN..CPU_OPACITY_MAX),
                    image,
                    hue: rng.gen_range(HUE_MIN..HUE_MAX),
                    scale: 1.0,
                }
            })
            .collect::<Vec<_>>();
        log::info!(
            "[hero] created {} drift particles over {} images",
            particles.len(),
            pool.len()
        );
        Self::from_particles(particles)
    }
}

impl<H> DriftField<H> {
    pub fn from_particles(particles: Vec<DriftParticle<H>>) -> Self {
        Self {
            particles,
            reduced: false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[DriftParticle<H>] {
        &self.particles
    }

    pub fn set_reduced_activity(&mut self, reduced: bool) {
        self.reduced = reduced;
    }

    #[inline]
    pub fn reduced_activity(&self) -> bool {
        self.reduced
    }

    pub fn tick(&mut self, viewport: &ViewportState) {
        let (w, h) = (viewport.width, viewport.height);
        let spin = if self.reduced { REDUCED_SPIN_FACTOR } else { 1.0 };
        for p in &mut self.particles {
            // proximity is measured before the particle moves
            p.scale = if self.reduced {
                1.0
            } else {
                enlargement_scale(p.position, viewport.pointer)
            };
            p.position += p.velocity;
            p.position.x = wrap_axis(p.position.x, w);
            p.position.y = wrap_axis(p.position.y, h);
            p.rotation += p.rotation_speed * spin;
        }
    }
}
