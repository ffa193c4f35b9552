use crate::dom;
use crate::input;
use hero_core::{ScrollDebounce, ViewportState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep `viewport` in step with the hero canvas: backing size on resize,
/// pointer from window mouse moves and canvas touch moves.
pub fn wire_viewport(canvas: &web::HtmlCanvasElement, viewport: Rc<RefCell<ViewportState>>) {
    let (w, h) = dom::sync_canvas_backing_size(canvas);
    viewport.borrow_mut().resize(w as f32, h as f32);

    let Some(window) = web::window() else {
        return;
    };

    let canvas_resize = canvas.clone();
    let viewport_resize = viewport.clone();
    dom::add_listener(&window, "resize", move |_| {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        viewport_resize.borrow_mut().resize(w as f32, h as f32);
        log::debug!("[hero] canvas resized to {}x{}", w, h);
    });

    let canvas_mouse = canvas.clone();
    let viewport_mouse = viewport.clone();
    dom::add_passive_listener(&window, "mousemove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let p = input::mouse_canvas_px(ev, &canvas_mouse);
            viewport_mouse.borrow_mut().set_pointer(p.x, p.y);
        }
    });

    let canvas_touch = canvas.clone();
    dom::add_passive_listener(canvas, "touchmove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(p) = input::touch_canvas_px(ev, &canvas_touch) {
            viewport.borrow_mut().set_pointer(p.x, p.y);
        }
    });
}

/// Record scroll timestamps for the hero's reduced-activity mode.
pub fn wire_scroll(scroll: Rc<RefCell<ScrollDebounce>>) {
    if let Some(window) = web::window() {
        dom::add_passive_listener(&window, "scroll", move |_| {
            scroll.borrow_mut().note_scroll(instant::now());
        });
    }
}
