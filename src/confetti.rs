use crate::constants::CONFETTI_CANVAS_ID;
use crate::dom;
use crate::frame::{install_frame_callback, FrameDriver};
use anyhow::anyhow;
use hero_core::constants::CONFETTI_BATCH;
use hero_core::{Animation, ConfettiBurst, ViewportState};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

/// Draws a [`ConfettiBurst`] as rotated squares on a full-window overlay.
pub struct ConfettiCanvas {
    ctx: web::CanvasRenderingContext2d,
    burst: ConfettiBurst,
}

impl Animation for ConfettiCanvas {
    fn tick(&mut self, viewport: &ViewportState, dt: Duration) {
        self.burst.advance(viewport, dt);
    }

    fn render(&mut self, viewport: &ViewportState) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        for piece in self.burst.active() {
            let half = piece.size as f64 / 2.0;
            ctx.save();
            let drawn = ctx
                .translate(piece.position.x as f64, piece.position.y as f64)
                .and_then(|_| ctx.rotate((piece.rotation_deg as f64).to_radians()));
            ctx.set_fill_style_str(piece.color);
            ctx.fill_rect(-half, -half, piece.size as f64, piece.size as f64);
            ctx.restore();
            drawn.map_err(|e| anyhow!("confetti transform failed: {:?}", e))?;
        }
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.burst.is_finished()
    }
}

/// Celebration overlay. Idle until `fire`; the loop stops itself once the
/// last piece has fallen out of view.
pub struct Confetti {
    driver: Rc<RefCell<FrameDriver<ConfettiCanvas>>>,
}

impl Confetti {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas = dom::canvas_by_id(document, CONFETTI_CANVAS_ID)?;
        let ctx = dom::context_2d(&canvas)?;
        let (w, h) = dom::sync_canvas_to_window(&canvas);
        let viewport = Rc::new(RefCell::new(ViewportState::new(w as f32, h as f32)));

        let viewport_resize = viewport.clone();
        if let Some(window) = web::window() {
            dom::add_listener(&window, "resize", move |_| {
                let (w, h) = dom::sync_canvas_to_window(&canvas);
                viewport_resize.borrow_mut().resize(w as f32, h as f32);
            });
        }

        let animation = ConfettiCanvas {
            ctx,
            burst: ConfettiBurst::new(0),
        };
        let driver = Rc::new(RefCell::new(FrameDriver::new("confetti", viewport, animation)));
        install_frame_callback(&driver);
        Ok(Self { driver })
    }

    /// Queue a batch; repeated calls stack on top of a running burst.
    pub fn fire(&self) {
        let mut driver = self.driver.borrow_mut();
        driver.animation_mut().burst.add_batch(CONFETTI_BATCH);
        if !driver.is_running() {
            driver.start();
        }
        log::info!("[confetti] burst of {} queued", CONFETTI_BATCH);
    }
}
