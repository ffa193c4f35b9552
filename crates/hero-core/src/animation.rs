//! Explicit start/stop state machine for frame-driven animations.
//!
//! The browser side supplies a [`FrameScheduler`] backed by
//! `requestAnimationFrame`; every scheduled callback calls
//! [`AnimationLoop::frame`], which ticks, renders and requests the next frame.

use crate::constants::{FRAME_LOG_INTERVAL, MAX_CONSECUTIVE_FAILURES};
use crate::engine::Animation;
use crate::error::EngineError;
use crate::viewport::ViewportState;
use std::time::Duration;

/// Handle returned by the scheduler for one pending frame.
pub type FrameToken = i32;

pub trait FrameScheduler {
    /// Ask for one callback at the next display refresh.
    fn request_frame(&mut self) -> Result<FrameToken, EngineError>;

    /// Cancel a pending callback. Unknown or already-fired tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Scheduled(FrameToken),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The callback arrived after `stop`; nothing ran.
    Skipped,
    /// Ticked, rendered and scheduled the next frame.
    Continued,
    /// The animation reported it is finished; no frame was scheduled.
    Finished,
    /// Too many failed frames or the scheduler refused; the loop is idle.
    Halted,
}

pub struct AnimationLoop {
    label: &'static str,
    state: LoopState,
    frames: u64,
    consecutive_failures: u32,
}

impl AnimationLoop {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            state: LoopState::Idle,
            frames: 0,
            consecutive_failures: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Scheduled(_))
    }

    /// Frames run since construction (across restarts).
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Schedule the first frame. Returns `false` if a frame is already pending.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.is_running() {
            return false;
        }
        self.consecutive_failures = 0;
        self.schedule(scheduler)
    }

    /// Cancel the pending frame. Returns `false` if the loop was already idle.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        match std::mem::replace(&mut self.state, LoopState::Idle) {
            LoopState::Scheduled(token) => {
                scheduler.cancel_frame(token);
                true
            }
            LoopState::Idle => false,
        }
    }

    /// Run one tick/render pair and request the next frame.
    pub fn frame<S, A>(
        &mut self,
        scheduler: &mut S,
        animation: &mut A,
        viewport: &ViewportState,
        dt: Duration,
    ) -> FrameOutcome
    where
        S: FrameScheduler + ?Sized,
        A: Animation + ?Sized,
    {
        if !self.is_running() {
            return FrameOutcome::Skipped;
        }
        // The pending token has fired.
        self.state = LoopState::Idle;
        self.frames += 1;
        if self.frames == 1 || self.frames % FRAME_LOG_INTERVAL == 0 {
            log::debug!("[loop:{}] frame {}", self.label, self.frames);
        }

        animation.tick(viewport, dt);
        match animation.render(viewport) {
            Ok(()) => self.consecutive_failures = 0,
            Err(e) => {
                self.consecutive_failures += 1;
                log::warn!("[loop:{}] render failed: {:?}", self.label, e);
                if self.consecutive_failures >= MAX_CONSECUTIVE_FAILURES {
                    log::error!(
                        "[loop:{}] stopping after {} failed frames",
                        self.label,
                        self.consecutive_failures
                    );
                    return FrameOutcome::Halted;
                }
            }
        }

        if animation.is_finished() {
            log::debug!("[loop:{}] finished after {} frames", self.label, self.frames);
            return FrameOutcome::Finished;
        }
        if self.schedule(scheduler) {
            FrameOutcome::Continued
        } else {
            FrameOutcome::Halted
        }
    }

    fn schedule<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        match scheduler.request_frame() {
            Ok(token) => {
                self.state = LoopState::Scheduled(token);
                true
            }
            Err(e) => {
                log::error!("[loop:{}] {}", self.label, e);
                self.state = LoopState::Idle;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingScheduler {
        next: FrameToken,
        cancelled: Vec<FrameToken>,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_frame(&mut self) -> Result<FrameToken, EngineError> {
            self.next += 1;
            Ok(self.next)
        }

        fn cancel_frame(&mut self, token: FrameToken) {
            self.cancelled.push(token);
        }
    }

    struct Flaky {
        ticks: u32,
        fail: bool,
    }

    impl Animation for Flaky {
        fn tick(&mut self, _viewport: &ViewportState, _dt: Duration) {
            self.ticks += 1;
        }

        fn render(&mut self, _viewport: &ViewportState) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("lost context");
            }
            Ok(())
        }
    }

    #[test]
    fn start_is_a_no_op_while_scheduled() {
        let mut sched = CountingScheduler::default();
        let mut lp = AnimationLoop::new("test");
        assert!(lp.start(&mut sched));
        assert!(!lp.start(&mut sched));
        assert_eq!(lp.state(), LoopState::Scheduled(1));
    }

    #[test]
    fn callback_after_stop_is_skipped() {
        let mut sched = CountingScheduler::default();
        let mut lp = AnimationLoop::new("test");
        let mut anim = Flaky { ticks: 0, fail: false };
        let vp = ViewportState::new(100.0, 100.0);
        lp.start(&mut sched);
        assert!(lp.stop(&mut sched));
        assert_eq!(sched.cancelled, vec![1]);
        let out = lp.frame(&mut sched, &mut anim, &vp, Duration::ZERO);
        assert_eq!(out, FrameOutcome::Skipped);
        assert_eq!(anim.ticks, 0);
    }

    #[test]
    fn one_bad_frame_does_not_strand_the_loop() {
        let mut sched = CountingScheduler::default();
        let mut lp = AnimationLoop::new("test");
        let mut anim = Flaky { ticks: 0, fail: true };
        let vp = ViewportState::new(100.0, 100.0);
        lp.start(&mut sched);
        assert_eq!(
            lp.frame(&mut sched, &mut anim, &vp, Duration::ZERO),
            FrameOutcome::Continued
        );
        anim.fail = false;
        assert_eq!(
            lp.frame(&mut sched, &mut anim, &vp, Duration::ZERO),
            FrameOutcome::Continued
        );
        assert!(lp.is_running());
    }

    #[test]
    fn persistent_failures_halt_cleanly() {
        let mut sched = CountingScheduler::default();
        let mut lp = AnimationLoop::new("test");
        let mut anim = Flaky { ticks: 0, fail: true };
        let vp = ViewportState::new(100.0, 100.0);
        lp.start(&mut sched);
        let mut last = FrameOutcome::Continued;
        for _ in 0..MAX_CONSECUTIVE_FAILURES {
            last = lp.frame(&mut sched, &mut anim, &vp, Duration::ZERO);
        }
        assert_eq!(last, FrameOutcome::Halted);
        assert!(!lp.is_running());
        assert_eq!(anim.ticks, MAX_CONSECUTIVE_FAILURES);
    }
}
