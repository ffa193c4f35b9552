// Host-side tests for the animation loop, visibility gate, asset fallback
// and confetti lifetime, driven by an in-memory frame scheduler.

use hero_core::assets::{AssetTracker, Readiness};
use hero_core::confetti::max_fall_ticks;
use hero_core::constants::{ASSET_TIMEOUT_MS, CONFETTI_BATCH, CONFETTI_STAGGER_MS, READY_THRESHOLD};
use hero_core::drift::DriftField;
use hero_core::fallback::{fallback_set, Bitmap};
use hero_core::{
    Animation, AnimationLoop, ConfettiBurst, EngineError, EngineKind, FrameClock, FrameOutcome,
    FrameScheduler, FrameToken, GateTransition, LoopState, ParticleEngine, ViewportState,
    VisibilityGate,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct RecordingScheduler {
    next: FrameToken,
    requested: Vec<FrameToken>,
    cancelled: Vec<FrameToken>,
}

impl FrameScheduler for RecordingScheduler {
    fn request_frame(&mut self) -> Result<FrameToken, EngineError> {
        self.next += 1;
        self.requested.push(self.next);
        Ok(self.next)
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.cancelled.push(token);
    }
}

// Canvas-style engine that records what it would draw.
struct RecordingEngine {
    field: DriftField<Rc<Bitmap>>,
    drawn_with_image: usize,
    renders: usize,
}

impl Animation for RecordingEngine {
    fn tick(&mut self, viewport: &ViewportState, _dt: Duration) {
        self.field.tick(viewport);
    }

    fn render(&mut self, _viewport: &ViewportState) -> anyhow::Result<()> {
        self.renders += 1;
        self.drawn_with_image = self
            .field
            .particles()
            .iter()
            .filter(|p| p.image.is_some())
            .count();
        Ok(())
    }
}

impl ParticleEngine for RecordingEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Canvas
    }

    fn particle_count(&self) -> usize {
        self.field.len()
    }

    fn dispose(&mut self) {
        self.field = DriftField::from_particles(Vec::new());
    }
}

struct ConfettiAnimation(ConfettiBurst);

impl Animation for ConfettiAnimation {
    fn tick(&mut self, viewport: &ViewportState, dt: Duration) {
        self.0.advance(viewport, dt);
    }

    fn render(&mut self, _viewport: &ViewportState) -> anyhow::Result<()> {
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

#[test]
fn hidden_twice_cancels_once() {
    let mut sched = RecordingScheduler::default();
    let mut lp = AnimationLoop::new("hero");
    let mut gate = VisibilityGate::new();
    lp.start(&mut sched);

    assert_eq!(gate.apply(false, &mut lp, &mut sched), GateTransition::Pause);
    assert_eq!(gate.apply(false, &mut lp, &mut sched), GateTransition::Unchanged);
    assert_eq!(sched.cancelled, vec![1]);
    assert_eq!(lp.state(), LoopState::Idle);

    assert_eq!(gate.apply(true, &mut lp, &mut sched), GateTransition::Resume);
    assert_eq!(gate.apply(true, &mut lp, &mut sched), GateTransition::Unchanged);
    assert_eq!(sched.requested, vec![1, 2]);
    assert!(lp.is_running());
}

#[test]
fn repeated_visible_signals_keep_the_frame_delta() {
    let ms = Duration::from_millis;
    let mut sched = RecordingScheduler::default();
    let mut lp = AnimationLoop::new("hero");
    let mut gate = VisibilityGate::new();
    let mut clock = FrameClock::new(ms(0));
    lp.start(&mut sched);

    // observer re-reports "visible" mid-frame
    clock.on_gate(gate.apply(true, &mut lp, &mut sched), ms(10));
    assert_eq!(clock.lap(ms(16)), ms(16));

    // a real pause/resume drops the hidden time
    clock.on_gate(gate.apply(false, &mut lp, &mut sched), ms(20));
    clock.on_gate(gate.apply(true, &mut lp, &mut sched), ms(3000));
    assert_eq!(clock.lap(ms(3016)), ms(16));
}

#[test]
fn restart_keeps_engine_state() {
    let mut sched = RecordingScheduler::default();
    let mut lp = AnimationLoop::new("hero");
    let mut gate = VisibilityGate::new();
    let vp = ViewportState::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(2);
    let pool = vec![Rc::new(Bitmap::transparent(1, 1))];
    let mut engine = RecordingEngine {
        field: DriftField::populate(500, &vp, &pool, &mut rng),
        drawn_with_image: 0,
        renders: 0,
    };

    lp.start(&mut sched);
    for _ in 0..3 {
        lp.frame(&mut sched, &mut engine, &vp, FRAME);
    }
    let before = engine.field.particles()[0].position;
    gate.apply(false, &mut lp, &mut sched);
    // a stale callback after the pause must not move anything
    assert_eq!(lp.frame(&mut sched, &mut engine, &vp, FRAME), FrameOutcome::Skipped);
    assert_eq!(engine.field.particles()[0].position, before);

    gate.apply(true, &mut lp, &mut sched);
    assert_eq!(lp.frame(&mut sched, &mut engine, &vp, FRAME), FrameOutcome::Continued);
    assert_eq!(engine.renders, 4);
    assert_eq!(engine.particle_count(), 500);
}

#[test]
fn zero_assets_before_timeout_renders_with_four_fallbacks() {
    let ids = 70;
    let mut tracker: AssetTracker<Rc<Bitmap>> = AssetTracker::new(ids, READY_THRESHOLD);
    assert!(ASSET_TIMEOUT_MS == 2000);
    // nothing decodes before the deadline
    assert_eq!(tracker.poll(), Readiness::Pending);
    assert_eq!(tracker.on_timeout(), Readiness::NeedsFallback);

    let fallbacks: Vec<Rc<Bitmap>> = fallback_set().into_iter().map(Rc::new).collect();
    assert_eq!(fallbacks.len(), 4);
    tracker.install_fallback(fallbacks.iter().cloned());
    let pool = tracker.snapshot();
    assert_eq!(pool.len(), 4);

    let vp = ViewportState::new(1024.0, 768.0);
    let mut rng = StdRng::seed_from_u64(8);
    let mut engine = RecordingEngine {
        field: DriftField::populate(1000, &vp, &pool, &mut rng),
        drawn_with_image: 0,
        renders: 0,
    };
    let mut sched = RecordingScheduler::default();
    let mut lp = AnimationLoop::new("hero");
    lp.start(&mut sched);
    assert_eq!(lp.frame(&mut sched, &mut engine, &vp, FRAME), FrameOutcome::Continued);
    assert_eq!(engine.drawn_with_image, 1000);
    for p in engine.field.particles() {
        let img = p.image.as_ref().expect("every particle has a fallback image");
        assert!(fallbacks.iter().any(|f| Rc::ptr_eq(f, img)));
    }

    // late arrivals join the pool but existing particles keep their images
    tracker.on_loaded(3, Rc::new(Bitmap::transparent(2, 2)));
    assert_eq!(tracker.snapshot().len(), 5);
    assert_eq!(engine.particle_count(), 1000);
}

#[test]
fn confetti_stops_scheduling_once_empty() {
    let vp = ViewportState::new(800.0, 600.0);
    let mut anim = ConfettiAnimation(ConfettiBurst::with_rng(CONFETTI_BATCH, StdRng::seed_from_u64(21)));
    let mut sched = RecordingScheduler::default();
    let mut lp = AnimationLoop::new("confetti");
    lp.start(&mut sched);

    let release_frames = (CONFETTI_BATCH as f64 * CONFETTI_STAGGER_MS / 16.0).ceil() as u32;
    let budget = release_frames + max_fall_ticks(vp.height) + 2;
    let mut frames = 0;
    let mut last = FrameOutcome::Continued;
    while lp.is_running() {
        last = lp.frame(&mut sched, &mut anim, &vp, FRAME);
        frames += 1;
        assert!(frames <= budget, "confetti still running after {frames} frames");
    }
    assert_eq!(last, FrameOutcome::Finished);
    assert!(anim.0.active().is_empty());
    assert_eq!(anim.0.unreleased(), 0);
    // no frame is left pending: the last request was consumed by the last frame
    assert_eq!(sched.requested.len() as u32, frames);
    assert_eq!(lp.frame(&mut sched, &mut anim, &vp, FRAME), FrameOutcome::Skipped);
}
