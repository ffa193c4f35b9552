use hero_core::{
    Animation, AnimationLoop, EngineError, FrameClock, FrameOutcome, FrameScheduler, FrameToken,
    GateTransition, ViewportState, VisibilityGate,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` scheduler. The callback is installed once by
/// [`install_frame_callback`] and re-armed by every `request_frame`.
#[derive(Clone, Default)]
pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Result<FrameToken, EngineError> {
        let window = web::window().ok_or_else(|| EngineError::Scheduler("no window".into()))?;
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| EngineError::Scheduler("frame callback not installed".into()))?;
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| EngineError::Scheduler(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(token);
        }
    }
}

/// One animation plus the loop and scheduler that drive it.
pub struct FrameDriver<A> {
    animation_loop: AnimationLoop,
    scheduler: RafScheduler,
    viewport: Rc<RefCell<ViewportState>>,
    clock: FrameClock<Instant>,
    animation: A,
}

impl<A: Animation> FrameDriver<A> {
    pub fn new(label: &'static str, viewport: Rc<RefCell<ViewportState>>, animation: A) -> Self {
        Self {
            animation_loop: AnimationLoop::new(label),
            scheduler: RafScheduler::default(),
            viewport,
            clock: FrameClock::new(Instant::now()),
            animation,
        }
    }

    #[inline]
    pub fn animation_mut(&mut self) -> &mut A {
        &mut self.animation
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.animation_loop.is_running()
    }

    pub fn start(&mut self) -> bool {
        let started = self.animation_loop.start(&mut self.scheduler);
        if started {
            self.clock.restart(Instant::now());
        }
        started
    }

    pub fn stop(&mut self) -> bool {
        self.animation_loop.stop(&mut self.scheduler)
    }

    pub fn apply_visibility(&mut self, gate: &mut VisibilityGate, visible: bool) -> GateTransition {
        let transition = gate.apply(visible, &mut self.animation_loop, &mut self.scheduler);
        self.clock.on_gate(transition, Instant::now());
        transition
    }

    pub fn frame(&mut self) -> FrameOutcome {
        let dt = self.clock.lap(Instant::now());
        let viewport = *self.viewport.borrow();
        self.animation_loop
            .frame(&mut self.scheduler, &mut self.animation, &viewport, dt)
    }
}

/// Install the rAF callback for `driver`. Frames are only scheduled by
/// `start` and by the loop itself.
pub fn install_frame_callback<A: Animation + 'static>(driver: &Rc<RefCell<FrameDriver<A>>>) {
    let callback = driver.borrow().scheduler.callback.clone();
    let driver_tick: Weak<RefCell<FrameDriver<A>>> = Rc::downgrade(driver);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(driver) = driver_tick.upgrade() {
            driver.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>));
}
