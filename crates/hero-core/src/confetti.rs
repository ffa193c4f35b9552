use crate::constants::*;
use crate::viewport::ViewportState;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ConfettiPiece {
    pub position: Vec2,
    pub size: f32,
    /// Fall speed, pixels per tick.
    pub speed: f32,
    pub rotation_deg: f32,
    pub spin_deg: f32,
    pub color: &'static str,
}

/// A short celebration: pieces are released one every
/// [`CONFETTI_STAGGER_MS`], fall straight down while spinning, and are
/// dropped once they pass the bottom edge.
pub struct ConfettiBurst {
    active: Vec<ConfettiPiece>,
    unreleased: usize,
    elapsed_ms: f64,
    next_release_ms: f64,
    rng: StdRng,
}

impl ConfettiBurst {
    pub fn new(batch: usize) -> Self {
        Self::with_rng(batch, StdRng::from_entropy())
    }

    pub fn with_rng(batch: usize, rng: StdRng) -> Self {
        Self {
            active: Vec::with_capacity(batch),
            unreleased: batch,
            elapsed_ms: 0.0,
            next_release_ms: 0.0,
            rng,
        }
    }

    /// Queue another batch behind whatever is still pending.
    pub fn add_batch(&mut self, batch: usize) {
        if self.unreleased == 0 {
            self.next_release_ms = self.elapsed_ms;
        }
        self.unreleased += batch;
    }

    #[inline]
    pub fn active(&self) -> &[ConfettiPiece] {
        &self.active
    }

    #[inline]
    pub fn unreleased(&self) -> usize {
        self.unreleased
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.unreleased == 0 && self.active.is_empty()
    }

    pub fn advance(&mut self, viewport: &ViewportState, dt: Duration) {
        self.elapsed_ms += dt.as_secs_f64() * 1000.0;
        while self.unreleased > 0 && self.next_release_ms <= self.elapsed_ms {
            let piece = self.spawn(viewport.width);
            self.active.push(piece);
            self.unreleased -= 1;
            self.next_release_ms += CONFETTI_STAGGER_MS;
        }

        for piece in &mut self.active {
            piece.position.y += piece.speed;
            piece.rotation_deg += piece.spin_deg;
        }
        let floor = viewport.height;
        self.active.retain(|piece| piece.position.y < floor);
    }

    fn spawn(&mut self, width: f32) -> ConfettiPiece {
        let rng = &mut self.rng;
        ConfettiPiece {
            position: Vec2::new(rng.gen::<f32>() * width, CONFETTI_START_Y),
            size: rng.gen_range(CONFETTI_SIZE_MIN..CONFETTI_SIZE_MAX),
            speed: rng.gen_range(CONFETTI_SPEED_MIN..CONFETTI_SPEED_MAX),
            rotation_deg: rng.gen::<f32>() * 360.0,
            spin_deg: rng.gen_range(-CONFETTI_SPIN_MAX_DEG..CONFETTI_SPIN_MAX_DEG),
            color: CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())],
        }
    }
}

/// Upper bound on the ticks a single piece needs to leave a viewport of the
/// given height.
pub fn max_fall_ticks(height: f32) -> u32 {
    ((height - CONFETTI_START_Y) / CONFETTI_SPEED_MIN).ceil() as u32
}
