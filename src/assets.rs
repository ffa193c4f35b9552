//! Browser image loading for the hero effects.
//!
//! Each path becomes an `HtmlImageElement`; its `load`/`error` events feed an
//! [`AssetTracker`]. Readiness is published once through a JS promise, after
//! installing the synthetic fallback set if nothing decoded.

use crate::dom;
use anyhow::anyhow;
use hero_core::fallback::Bitmap;
use hero_core::{AssetTracker, Readiness};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// A decoded bitmap the page can draw: a loaded photo or a painted canvas.
/// Clones share the underlying JS object.
#[derive(Clone, Debug)]
pub enum ImageHandle {
    Image(web::HtmlImageElement),
    Canvas(web::HtmlCanvasElement),
}

impl ImageHandle {
    pub fn size(&self) -> (u32, u32) {
        match self {
            Self::Image(img) => (img.natural_width(), img.natural_height()),
            Self::Canvas(c) => (c.width(), c.height()),
        }
    }

    /// Draw scaled into the `w`×`h` box at (`x`, `y`).
    pub fn draw(
        &self,
        ctx: &web::CanvasRenderingContext2d,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<(), JsValue> {
        match self {
            Self::Image(img) => ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h),
            Self::Canvas(c) => ctx.draw_image_with_html_canvas_element_and_dw_and_dh(c, x, y, w, h),
        }
    }

    /// Read back straight-alpha RGBA pixels through an offscreen canvas.
    pub fn to_bitmap(&self) -> anyhow::Result<Bitmap> {
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return Err(anyhow!("image has no pixels"));
        }
        let canvas = offscreen_canvas(width, height)?;
        let ctx = dom::context_2d(&canvas)?;
        self.draw(&ctx, 0.0, 0.0, width as f64, height as f64)
            .map_err(|e| anyhow!("drawImage failed: {:?}", e))?;
        let data = ctx
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .map_err(|e| anyhow!("getImageData failed: {:?}", e))?;
        Ok(Bitmap {
            width,
            height,
            pixels: data.data().0,
        })
    }
}

fn offscreen_canvas(width: u32, height: u32) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("createElement(canvas) failed: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    Ok(canvas)
}

/// Paint a bitmap onto a fresh canvas so it can be drawn like a photo.
pub fn bitmap_to_canvas(bitmap: &Bitmap) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = offscreen_canvas(bitmap.width, bitmap.height)?;
    let ctx = dom::context_2d(&canvas)?;
    let data = web::ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(&bitmap.pixels),
        bitmap.width,
        bitmap.height,
    )
    .map_err(|e| anyhow!("ImageData failed: {:?}", e))?;
    ctx.put_image_data(&data, 0.0, 0.0)
        .map_err(|e| anyhow!("putImageData failed: {:?}", e))?;
    Ok(canvas)
}

pub struct AssetRequest {
    pub paths: Vec<String>,
    /// Successful loads needed before the pool counts as ready.
    pub threshold: usize,
    pub timeout_ms: i32,
    pub cross_origin: bool,
    /// Synthetic set installed when nothing decodes.
    pub fallback: fn() -> Vec<Bitmap>,
}

type Tracker = Rc<RefCell<AssetTracker<ImageHandle>>>;

#[derive(Clone)]
struct Publisher {
    tracker: Tracker,
    resolve: Rc<RefCell<Option<js_sys::Function>>>,
    fallback: fn() -> Vec<Bitmap>,
}

impl Publisher {
    fn publish(&self, readiness: Readiness) {
        match readiness {
            Readiness::Ready => {}
            Readiness::NeedsFallback => {
                let handles: Vec<ImageHandle> = (self.fallback)()
                    .iter()
                    .filter_map(|bmp| match bitmap_to_canvas(bmp) {
                        Ok(c) => Some(ImageHandle::Canvas(c)),
                        Err(e) => {
                            log::error!("[assets] fallback bitmap unusable: {:?}", e);
                            None
                        }
                    })
                    .collect();
                self.tracker.borrow_mut().install_fallback(handles);
            }
            Readiness::Pending | Readiness::AlreadyReady => return,
        }
        if let Some(resolve) = self.resolve.borrow_mut().take() {
            _ = resolve.call0(&JsValue::NULL);
        }
    }
}

/// In-flight batch of image loads.
pub struct AssetLoader {
    tracker: Tracker,
    ready: js_sys::Promise,
}

impl AssetLoader {
    /// Kick off every load and arm the timeout. Loads keep going after
    /// readiness and land in the pool for later snapshots.
    pub fn start(request: AssetRequest) -> anyhow::Result<Self> {
        let tracker: Tracker = Rc::new(RefCell::new(AssetTracker::new(
            request.paths.len(),
            request.threshold,
        )));
        let resolve_slot: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
        let slot = resolve_slot.clone();
        let mut executor = move |resolve: js_sys::Function, _reject: js_sys::Function| {
            *slot.borrow_mut() = Some(resolve);
        };
        let ready = js_sys::Promise::new(&mut executor);
        let publisher = Publisher {
            tracker: tracker.clone(),
            resolve: resolve_slot,
            fallback: request.fallback,
        };

        log::info!("[assets] loading {} images", request.paths.len());
        for (index, path) in request.paths.iter().enumerate() {
            let img = web::HtmlImageElement::new().map_err(|e| anyhow!("{:?}", e))?;
            if request.cross_origin {
                img.set_cross_origin(Some("anonymous"));
            }

            let on_load_pub = publisher.clone();
            let loaded = img.clone();
            let on_load = Closure::wrap(Box::new(move || {
                let readiness = on_load_pub
                    .tracker
                    .borrow_mut()
                    .on_loaded(index, ImageHandle::Image(loaded.clone()));
                on_load_pub.publish(readiness);
            }) as Box<dyn FnMut()>);

            let on_error_pub = publisher.clone();
            let failed_path = path.clone();
            let on_error = Closure::wrap(Box::new(move || {
                log::warn!("[assets] failed to load {}", failed_path);
                let readiness = on_error_pub.tracker.borrow_mut().on_failed(index);
                on_error_pub.publish(readiness);
            }) as Box<dyn FnMut()>);

            img.set_onload(Some(on_load.as_ref().unchecked_ref()));
            img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            on_load.forget();
            on_error.forget();
            img.set_src(path);
        }

        // An empty list settles immediately.
        let readiness = tracker.borrow_mut().poll();
        publisher.publish(readiness);

        let on_timeout = publisher.clone();
        dom::set_timeout(request.timeout_ms, move || {
            let readiness = on_timeout.tracker.borrow_mut().on_timeout();
            on_timeout.publish(readiness);
        });

        Ok(Self { tracker, ready })
    }

    /// Wait for readiness and return the pool as it is at that moment.
    pub async fn ready(&self) -> anyhow::Result<Vec<ImageHandle>> {
        JsFuture::from(self.ready.clone())
            .await
            .map_err(|e| anyhow!("asset readiness rejected: {:?}", e))?;
        let tracker = self.tracker.borrow();
        log::info!(
            "[assets] ready with {} images ({} loaded, {} failed)",
            tracker.pool_len(),
            tracker.loaded(),
            tracker.failed()
        );
        Ok(tracker.snapshot())
    }
}
