#![cfg(target_arch = "wasm32")]
use hero_core::{RendererChoice, ScrollDebounce, ViewportState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod canvas;
mod confetti;
mod constants;
mod dom;
mod events;
mod form;
mod frame;
mod hero;
mod input;
mod lightbox;
mod render;
mod ui;
mod visibility;

use constants::{HERO_CANVAS_ID, RENDERER_ATTR};
use hero::{HeroAnimation, HeroController};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page glue first so it works while the hero is still loading.
    ui::wire_all(&document);
    let confetti = match confetti::Confetti::new(&document) {
        Ok(c) => Some(Rc::new(c)),
        Err(e) => {
            log::warn!("[confetti] disabled: {:?}", e);
            None
        }
    };
    form::wire_form(&document, confetti);

    let canvas = dom::canvas_by_id(&document, HERO_CANVAS_ID)?;
    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let viewport = Rc::new(RefCell::new(ViewportState::new(w as f32, h as f32)));
    let scroll = Rc::new(RefCell::new(ScrollDebounce::default()));
    let controller = Rc::new(RefCell::new(HeroController::new()));

    events::wire_scroll(scroll.clone());
    hero::observe_hero(&document, controller.clone());

    let choice = RendererChoice::from_attr(canvas.get_attribute(RENDERER_ATTR).as_deref());
    log::info!("[hero] renderer choice {:?}", choice);
    let initial_viewport = *viewport.borrow();
    let (engine, canvas) = hero::create_engine(choice, canvas, &initial_viewport).await?;

    events::wire_viewport(&canvas, viewport.clone());
    let driver = Rc::new(RefCell::new(frame::FrameDriver::new(
        "hero",
        viewport,
        HeroAnimation::new(engine, scroll),
    )));
    frame::install_frame_callback(&driver);
    controller.borrow_mut().attach(driver);

    if let Some(window) = web::window() {
        dom::add_listener(&window, "pagehide", move |_| {
            controller.borrow_mut().dispose();
        });
    }
    Ok(())
}
