use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    }
}

/// Attach `handler` for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

/// Passive variant for high-frequency events (scroll, touchmove without
/// `preventDefault`).
pub fn add_passive_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("addEventListener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

/// Match the canvas backing store to its CSS box and return the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let w_px = canvas.offset_width().max(1) as u32;
    let h_px = canvas.offset_height().max(1) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Size a full-window overlay canvas to the window's inner size.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = inner_size();
    let (w, h) = (w.max(1.0) as u32, h.max(1.0) as u32);
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

/// `innerWidth` × `innerHeight` of the window, zero when unavailable.
pub fn inner_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    (px(w.inner_width()), px(w.inner_height()))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext(2d) failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected 2d context type: {:?}", e))
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) {
    let closure = Closure::once(handler);
    if let Some(w) = web::window() {
        if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        ) {
            log::warn!("setTimeout failed: {:?}", e);
        }
    }
    closure.forget();
}

/// Swap `canvas` for a fresh copy so a new context type can be acquired.
/// A canvas keeps whichever context it handed out first.
pub fn replace_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::HtmlCanvasElement> {
    let fresh = canvas
        .clone_node()
        .map_err(|e| anyhow!("cloneNode failed: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("clone is not a canvas: {:?}", e))?;
    canvas
        .replace_with_with_node_1(&fresh)
        .map_err(|e| anyhow!("replaceWith failed: {:?}", e))?;
    Ok(fresh)
}
