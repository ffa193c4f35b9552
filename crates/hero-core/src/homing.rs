//! Grid-anchored particles for the instanced GPU hero.
//!
//! Each particle is pushed away from the pointer, pulled back toward its
//! home cell by an exponential spring, and drifts slightly. The field packs
//! its per-frame state into [`ParticleInstance`] records for upload.

use crate::constants::*;
use crate::viewport::ViewportState;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Per-instance vertex data rewritten every frame. Must match
/// the per-instance `VsIn` locations in `particles.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub size: f32,
    pub rotation: f32,
}

#[derive(Clone, Debug)]
pub struct HomingParticle {
    pub position: Vec2,
    pub base: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
}

impl HomingParticle {
    #[inline]
    pub fn offset_from_base(&self) -> f32 {
        self.position.distance(self.base)
    }

    #[inline]
    pub fn instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            size: self.size,
            rotation: self.rotation,
        }
    }
}

/// Columns × rows matching the viewport aspect ratio, with at least one cell
/// per particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    pub cell: Vec2,
}

impl GridLayout {
    pub fn for_viewport(count: usize, width: f32, height: f32) -> Self {
        let aspect = width / height.max(1.0);
        let cols = ((count as f32 * aspect).sqrt().ceil() as usize).max(1);
        let rows = count.div_ceil(cols);
        Self {
            cols,
            rows,
            cell: Vec2::new(width / cols as f32, height / rows.max(1) as f32),
        }
    }

    #[inline]
    pub fn cell_center(&self, index: usize) -> Vec2 {
        let col = (index % self.cols) as f32;
        let row = (index / self.cols) as f32;
        Vec2::new(
            col * self.cell.x + self.cell.x * 0.5,
            row * self.cell.y + self.cell.y * 0.5,
        )
    }
}

/// Displacement that pushes `position` away from `pointer`, strongest at the
/// pointer and zero at [`REPEL_RADIUS`].
#[inline]
pub fn repulsion(position: Vec2, pointer: Option<Vec2>) -> Vec2 {
    let Some(pointer) = pointer else {
        return Vec2::ZERO;
    };
    let toward = pointer - position;
    let dist = toward.length();
    if dist < REPEL_RADIUS {
        let force = (REPEL_RADIUS - dist) / REPEL_RADIUS;
        -toward * force * REPEL_STRENGTH
    } else {
        Vec2::ZERO
    }
}

pub struct HomingField {
    particles: Vec<HomingParticle>,
}

impl HomingField {
    pub fn populate<R: Rng + ?Sized>(count: usize, viewport: &ViewportState, rng: &mut R) -> Self {
        let grid = GridLayout::for_viewport(count, viewport.width, viewport.height);
        let jitter = grid.cell * GRID_JITTER;
        let particles = (0..count)
            .map(|i| {
                let offset = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * jitter;
                let home = grid.cell_center(i) + offset;
                HomingParticle {
                    position: home,
                    base: home,
                    velocity: Vec2::new(
                        rng.gen_range(-GPU_DRIFT_MAX..GPU_DRIFT_MAX),
                        rng.gen_range(-GPU_DRIFT_MAX..GPU_DRIFT_MAX),
                    ),
                    size: rng.gen_range(GPU_SIZE_MIN..GPU_SIZE_MAX),
                    rotation: rng.gen::<f32>() * TAU,
                    rotation_speed: rng.gen_range(-GPU_SPIN_MAX..GPU_SPIN_MAX),
                    opacity: rng.gen_range(GPU_OPACITY_MIN..GPU_OPACITY_MAX),
                }
            })
            .collect::<Vec<_>>();
        log::info!(
            "[gpu] laid out {} particles on a {}x{} grid",
            particles.len(),
            grid.cols,
            grid.rows
        );
        Self { particles }
    }

    pub fn from_particles(particles: Vec<HomingParticle>) -> Self {
        Self { particles }
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
    pub fn particles(&self) -> &[HomingParticle] {
        &self.particles
    }

    pub fn tick(&mut self, pointer: Option<Vec2>) {
        for p in &mut self.particles {
            p.position += repulsion(p.position, pointer);
            p.position += (p.base - p.position) * HOMING_RATE;
            p.position += p.velocity;
            p.rotation += p.rotation_speed;
        }
    }

    /// Refill `out` with this frame's instance records, in particle order.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.particles.iter().map(HomingParticle::instance));
    }

    /// Static per-instance opacity, uploaded once.
    pub fn opacities(&self) -> Vec<f32> {
        self.particles.iter().map(|p| p.opacity).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_every_particle() {
        for &(n, w, h) in &[(10_000, 1920.0, 1080.0), (7, 300.0, 900.0), (1, 10.0, 10.0)] {
            let g = GridLayout::for_viewport(n, w, h);
            assert!(g.cols * g.rows >= n, "{}x{} < {}", g.cols, g.rows, n);
        }
    }

    #[test]
    fn grid_follows_aspect_ratio() {
        let g = GridLayout::for_viewport(10_000, 1600.0, 900.0);
        assert_eq!(g.cols, 134); // ceil(sqrt(10000 * 16/9))
        assert_eq!(g.rows, 75);
    }

    #[test]
    fn repulsion_points_away_from_pointer() {
        let p = Vec2::new(100.0, 100.0);
        let push = repulsion(p, Some(Vec2::new(130.0, 100.0)));
        assert!(push.x < 0.0 && push.y == 0.0);
        // (150 - 30) / 150 * 30 * 0.5
        assert!((push.x + 12.0).abs() < 1e-4);
        assert_eq!(repulsion(p, Some(Vec2::new(400.0, 100.0))), Vec2::ZERO);
        assert_eq!(repulsion(p, None), Vec2::ZERO);
    }

    #[test]
    fn instances_pack_to_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 16);
    }
}
