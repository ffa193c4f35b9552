//! Hero section: picks a renderer, drives it, and pauses it off-screen.

use crate::assets::{AssetLoader, AssetRequest};
use crate::canvas::CpuParticleEngine;
use crate::constants::{
    HERO_IMAGE_PATHS, HERO_SECTION_SELECTOR, HERO_VISIBLE_THRESHOLD, LOGO_PATH,
    LOGO_READY_THRESHOLD,
};
use crate::dom;
use crate::frame::FrameDriver;
use crate::render::GpuParticleEngine;
use crate::visibility;
use anyhow::anyhow;
use hero_core::constants::{ASSET_TIMEOUT_MS, READY_THRESHOLD};
use hero_core::fallback::{fallback_set, fallback_texture, Bitmap};
use hero_core::{
    Animation, EngineError, EngineKind, ParticleEngine, RendererChoice, ScrollDebounce,
    ViewportState, VisibilityGate,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

/// The chosen engine plus the scroll signal it reacts to.
pub struct HeroAnimation {
    engine: Box<dyn ParticleEngine>,
    scroll: Rc<RefCell<ScrollDebounce>>,
    reduced: bool,
}

impl HeroAnimation {
    pub fn new(engine: Box<dyn ParticleEngine>, scroll: Rc<RefCell<ScrollDebounce>>) -> Self {
        Self {
            engine,
            scroll,
            reduced: false,
        }
    }

    pub fn dispose(&mut self) {
        self.engine.dispose();
    }
}

impl Animation for HeroAnimation {
    fn tick(&mut self, viewport: &ViewportState, dt: Duration) {
        let reduced = self.scroll.borrow().is_scrolling(instant::now());
        if reduced != self.reduced {
            self.reduced = reduced;
            self.engine.set_reduced_activity(reduced);
        }
        self.engine.tick(viewport, dt);
    }

    fn render(&mut self, viewport: &ViewportState) -> anyhow::Result<()> {
        self.engine.render(viewport)
    }
}

/// Owns the visibility gate. Signals that arrive before the engine is
/// ready only update the gate; `attach` honours the latest one.
pub struct HeroController {
    gate: VisibilityGate,
    driver: Option<Rc<RefCell<FrameDriver<HeroAnimation>>>>,
}

impl HeroController {
    pub fn new() -> Self {
        Self {
            gate: VisibilityGate::new(),
            driver: None,
        }
    }

    pub fn on_visibility(&mut self, visible: bool) {
        match &self.driver {
            Some(driver) => {
                driver.borrow_mut().apply_visibility(&mut self.gate, visible);
            }
            None => {
                self.gate.observe(visible);
            }
        }
    }

    pub fn attach(&mut self, driver: Rc<RefCell<FrameDriver<HeroAnimation>>>) {
        if self.gate.is_visible() {
            driver.borrow_mut().start();
        } else {
            log::info!("[hero] engine ready while hidden, waiting for visibility");
        }
        self.driver = Some(driver);
    }

    /// Stop the loop and release the engine. Later visibility signals are
    /// ignored.
    pub fn dispose(&mut self) {
        if let Some(driver) = self.driver.take() {
            let mut driver = driver.borrow_mut();
            driver.stop();
            driver.animation_mut().dispose();
        }
    }
}

impl Default for HeroController {
    fn default() -> Self {
        Self::new()
    }
}

/// Feed hero section visibility into `controller`. Without a hero section
/// the gate stays open.
pub fn observe_hero(document: &web::Document, controller: Rc<RefCell<HeroController>>) {
    let section = match document.query_selector(HERO_SECTION_SELECTOR) {
        Ok(Some(el)) => el,
        _ => {
            log::warn!("[gate] no {} section, visibility gating disabled", HERO_SECTION_SELECTOR);
            return;
        }
    };
    let observer =
        visibility::intersection_observer(HERO_VISIBLE_THRESHOLD, None, move |entry, _| {
            controller.borrow_mut().on_visibility(entry.is_intersecting());
        });
    match observer {
        Ok(observer) => observer.observe(&section),
        Err(e) => log::warn!("[gate] {:?}", e),
    }
}

fn logo_fallback() -> Vec<Bitmap> {
    vec![fallback_texture()]
}

async fn load_logo_bitmap() -> Bitmap {
    let request = AssetRequest {
        paths: vec![LOGO_PATH.to_string()],
        threshold: LOGO_READY_THRESHOLD,
        timeout_ms: ASSET_TIMEOUT_MS,
        cross_origin: true,
        fallback: logo_fallback,
    };
    let pool = match AssetLoader::start(request) {
        Ok(loader) => loader.ready().await,
        Err(e) => Err(e),
    };
    let bitmap = pool.and_then(|pool| {
        pool.first()
            .ok_or_else(|| anyhow!("empty texture pool"))?
            .to_bitmap()
    });
    bitmap.unwrap_or_else(|e| {
        log::warn!("[gpu] logo unusable ({:?}), using gradient texture", e);
        fallback_texture()
    })
}

async fn create_gpu(
    canvas: &web::HtmlCanvasElement,
    viewport: &ViewportState,
) -> Result<Box<dyn ParticleEngine>, EngineError> {
    let texture = load_logo_bitmap().await;
    let engine = GpuParticleEngine::create(canvas, viewport, &texture).await?;
    Ok(Box::new(engine))
}

async fn create_canvas(
    canvas: &web::HtmlCanvasElement,
    viewport: &ViewportState,
) -> Result<Box<dyn ParticleEngine>, EngineError> {
    let request = AssetRequest {
        paths: HERO_IMAGE_PATHS.iter().map(|p| p.to_string()).collect(),
        threshold: READY_THRESHOLD,
        timeout_ms: ASSET_TIMEOUT_MS,
        cross_origin: false,
        fallback: fallback_set,
    };
    let loader = AssetLoader::start(request).map_err(|e| EngineError::Asset(e.to_string()))?;
    let pool = loader
        .ready()
        .await
        .map_err(|e| EngineError::Asset(e.to_string()))?;
    let engine = CpuParticleEngine::create(canvas, viewport, &pool)?;
    Ok(Box::new(engine))
}

/// Try each renderer `choice` allows, in order. Returns the engine and the
/// canvas it draws on, which differs from `canvas` if a failed GPU attempt
/// forced a swap.
pub async fn create_engine(
    choice: RendererChoice,
    canvas: web::HtmlCanvasElement,
    viewport: &ViewportState,
) -> anyhow::Result<(Box<dyn ParticleEngine>, web::HtmlCanvasElement)> {
    let mut canvas = canvas;
    let mut canvas_used = false;
    let mut last_err = None;
    for &kind in choice.candidates() {
        if canvas_used {
            canvas = dom::replace_canvas(&canvas)?;
            canvas_used = false;
        }
        let result = match kind {
            EngineKind::Gpu => create_gpu(&canvas, viewport).await,
            EngineKind::Canvas => create_canvas(&canvas, viewport).await,
        };
        match result {
            Ok(engine) => {
                log::info!(
                    "[hero] {:?} engine running {} particles",
                    engine.kind(),
                    engine.particle_count()
                );
                return Ok((engine, canvas));
            }
            Err(e) => {
                log::warn!("[hero] {:?} engine unavailable: {}", kind, e);
                canvas_used = kind == EngineKind::Gpu;
                last_err = Some(e);
            }
        }
    }
    Err(match last_err {
        Some(e) => anyhow!("no hero renderer available: {}", e),
        None => anyhow!("no hero renderer candidates"),
    })
}
