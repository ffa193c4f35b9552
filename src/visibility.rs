use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Create an IntersectionObserver relative to the viewport that hands each
/// entry to `on_entry`. The callback lives as long as the page.
pub fn intersection_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow!("IntersectionObserver unavailable: {:?}", e))?;
    callback.forget();
    Ok(observer)
}
