use crate::assets::ImageHandle;
use crate::constants::TRAIL_FILL;
use crate::dom;
use anyhow::anyhow;
use hero_core::drift::budget_for_layout_width;
use hero_core::{
    Animation, DriftField, DriftParticle, EngineError, EngineKind, ParticleEngine, ViewportState,
};
use std::f64::consts::TAU;
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Canvas2D hero: one `drawImage` per particle, trails from a translucent wash.
pub struct CpuParticleEngine {
    ctx: web::CanvasRenderingContext2d,
    field: DriftField<ImageHandle>,
}

impl CpuParticleEngine {
    /// `pool` is the readiness snapshot; later loads are not picked up.
    pub fn create(
        canvas: &web::HtmlCanvasElement,
        viewport: &ViewportState,
        pool: &[ImageHandle],
    ) -> Result<Self, EngineError> {
        let ctx = dom::context_2d(canvas).map_err(|e| EngineError::Surface(e.to_string()))?;
        let (layout_width, _) = dom::inner_size();
        let count = budget_for_layout_width(layout_width);
        let field = DriftField::populate(count, viewport, pool, &mut rand::thread_rng());
        Ok(Self { ctx, field })
    }

    fn draw_particle(&self, p: &DriftParticle<ImageHandle>, reduced: bool) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let size = p.rendered_size() as f64;
        ctx.translate(p.position.x as f64, p.position.y as f64)?;
        ctx.rotate(p.rotation as f64)?;
        ctx.set_global_alpha(p.draw_alpha(reduced) as f64);
        match &p.image {
            Some(image) => image.draw(ctx, -size / 2.0, -size / 2.0, size, size),
            None => {
                ctx.set_fill_style_str(&format!("hsl({}, 70%, 60%)", p.hue));
                ctx.begin_path();
                ctx.arc(0.0, 0.0, size / 2.0, 0.0, TAU)?;
                ctx.fill();
                Ok(())
            }
        }
    }
}

impl Animation for CpuParticleEngine {
    fn tick(&mut self, viewport: &ViewportState, _dt: Duration) {
        self.field.tick(viewport);
    }

    fn render(&mut self, viewport: &ViewportState) -> anyhow::Result<()> {
        let (w, h) = (viewport.width as f64, viewport.height as f64);
        let reduced = self.field.reduced_activity();
        if reduced {
            self.ctx.clear_rect(0.0, 0.0, w, h);
        } else {
            self.ctx.set_fill_style_str(TRAIL_FILL);
            self.ctx.fill_rect(0.0, 0.0, w, h);
        }

        let mut failed = 0usize;
        for p in self.field.particles() {
            self.ctx.save();
            let drawn = self.draw_particle(p, reduced);
            self.ctx.restore();
            if drawn.is_err() {
                failed += 1;
            }
        }
        if failed > 0 {
            return Err(anyhow!("{} of {} particles failed to draw", failed, self.field.len()));
        }
        Ok(())
    }
}

impl ParticleEngine for CpuParticleEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Canvas
    }

    fn particle_count(&self) -> usize {
        self.field.len()
    }

    fn set_reduced_activity(&mut self, reduced: bool) {
        self.field.set_reduced_activity(reduced);
    }

    fn dispose(&mut self) {
        self.field = DriftField::from_particles(Vec::new());
        if let Some(canvas) = self.ctx.canvas() {
            self.ctx
                .clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        }
        log::info!("[hero] canvas engine disposed");
    }
}
