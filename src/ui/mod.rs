//! Page behaviors around the hero: anchors, navbar, ripples, fade-ins, lightbox.

pub mod navbar;
pub mod ripple;

use crate::constants::*;
use crate::dom;
use crate::events::keyboard::lightbox_action_for_key;
use crate::lightbox::{Gallery, LightboxAction};
use crate::visibility;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_all(document: &web::Document) {
    wire_smooth_scroll(document);
    wire_navbar(document);
    wire_ripples(document);
    wire_fade_in(document);
    if let Err(e) = wire_lightbox(document) {
        log::warn!("[ui] lightbox not wired: {:?}", e);
    }
}

fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // a bare "#" is not a valid selector
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

fn wire_navbar(document: &web::Document) {
    let navbar = match document.query_selector(NAVBAR_SELECTOR) {
        Ok(Some(el)) => el,
        _ => return,
    };
    let Ok(navbar) = navbar.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let apply = move |scroll_y: f64| {
        let style = navbar::navbar_style(scroll_y);
        dom::set_style(&navbar, "background", style.background);
        dom::set_style(&navbar, "box-shadow", style.box_shadow);
    };
    let scroller = window.clone();
    dom::add_passive_listener(&window, "scroll", move |_| {
        apply(scroller.scroll_y().unwrap_or(0.0));
    });
}

fn wire_ripples(document: &web::Document) {
    if let Some(head) = document.head() {
        if let Ok(style) = document.create_element("style") {
            style.set_text_content(Some(RIPPLE_CSS));
            _ = head.append_child(&style);
        }
    }
    for button in dom::query_all(document, RIPPLE_SELECTOR) {
        let doc = document.clone();
        let host = button.clone();
        dom::add_listener(&button, "click", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            if let Err(e) = spawn_ripple(&doc, &host, ev) {
                log::debug!("[ui] ripple skipped: {:?}", e);
            }
        });
    }
}

fn spawn_ripple(
    document: &web::Document,
    host: &web::HtmlElement,
    ev: &web::MouseEvent,
) -> anyhow::Result<()> {
    let rect = host.get_bounding_client_rect();
    let b = ripple::ripple_box(
        rect.width(),
        rect.height(),
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    );
    let span = document
        .create_element("span")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    let size = format!("{}px", b.size);
    dom::set_style(&span, "width", &size);
    dom::set_style(&span, "height", &size);
    dom::set_style(&span, "left", &format!("{}px", b.left));
    dom::set_style(&span, "top", &format!("{}px", b.top));
    span.class_list()
        .add_1(RIPPLE_CLASS)
        .map_err(|e| anyhow!("{:?}", e))?;
    host.append_child(&span).map_err(|e| anyhow!("{:?}", e))?;
    dom::set_timeout(RIPPLE_LIFETIME_MS, move || span.remove());
    Ok(())
}

fn wire_fade_in(document: &web::Document) {
    let targets = dom::query_all(document, FADE_SELECTOR);
    if targets.is_empty() {
        return;
    }
    let observer =
        visibility::intersection_observer(FADE_THRESHOLD, Some(FADE_ROOT_MARGIN), |entry, _| {
            if !entry.is_intersecting() {
                return;
            }
            if let Ok(el) = entry.target().dyn_into::<web::HtmlElement>() {
                dom::set_style(&el, "opacity", "1");
                dom::set_style(&el, "transform", "translateY(0)");
            }
        });
    let observer = match observer {
        Ok(o) => o,
        Err(e) => {
            // leave the cards visible rather than hidden forever
            log::warn!("[ui] fade-in disabled: {:?}", e);
            return;
        }
    };
    let offset = format!("translateY({}px)", FADE_OFFSET_PX);
    for el in &targets {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", &offset);
        dom::set_style(el, "transition", FADE_TRANSITION);
        observer.observe(el);
    }
}

/// One gallery entry, read from a prototype card.
#[derive(Clone, Debug, Default)]
struct Slide {
    src: String,
    alt: String,
    title: String,
    description: String,
}

impl Slide {
    fn from_card(card: &web::HtmlElement) -> Self {
        let text = |sel: &str| {
            card.query_selector(sel)
                .ok()
                .flatten()
                .and_then(|el| el.text_content())
                .unwrap_or_default()
        };
        let image = card
            .query_selector(".prototype-image img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
        Self {
            src: image.as_ref().map(|i| i.src()).unwrap_or_default(),
            alt: image.as_ref().map(|i| i.alt()).unwrap_or_default(),
            title: text(".prototype-overlay h3"),
            description: text(".prototype-overlay p"),
        }
    }
}

struct Lightbox {
    document: web::Document,
    root: web::HtmlElement,
    image: web::HtmlImageElement,
    caption: web::HtmlElement,
    slides: Vec<Slide>,
    gallery: Gallery,
}

impl Lightbox {
    fn open(&mut self, index: usize) {
        if !self.gallery.open_at(index) {
            return;
        }
        self.show_current();
        _ = self.root.class_list().add_1(SHOW_CLASS);
        if let Some(body) = self.document.body() {
            dom::set_style(&body, "overflow", "hidden");
        }
    }

    fn apply(&mut self, action: LightboxAction) {
        if !self.gallery.is_open() {
            return;
        }
        match self.gallery.apply(action) {
            Some(_) => self.show_current(),
            None => {
                _ = self.root.class_list().remove_1(SHOW_CLASS);
                if let Some(body) = self.document.body() {
                    dom::set_style(&body, "overflow", "");
                }
            }
        }
    }

    fn show_current(&self) {
        let Some(slide) = self.slides.get(self.gallery.current()) else {
            return;
        };
        self.image.set_src(&slide.src);
        self.image.set_alt(&slide.alt);
        self.caption.set_text_content(None);
        if let Ok(strong) = self.document.create_element("strong") {
            strong.set_text_content(Some(&slide.title));
            _ = self.caption.append_child(&strong);
        }
        let rest = self
            .document
            .create_text_node(&format!(" - {}", slide.description));
        _ = self.caption.append_child(&rest);
    }
}

fn element<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|_| anyhow!("#{} has an unexpected element type", id))
}

fn wire_lightbox(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all(document, PROTOTYPE_CARD_SELECTOR);
    let root: web::HtmlElement = element(document, LIGHTBOX_ID)?;
    let lightbox = Rc::new(RefCell::new(Lightbox {
        document: document.clone(),
        root: root.clone(),
        image: element(document, LIGHTBOX_IMG_ID)?,
        caption: element(document, LIGHTBOX_CAPTION_ID)?,
        slides: cards.iter().map(Slide::from_card).collect(),
        gallery: Gallery::new(cards.len()),
    }));

    for (index, card) in cards.iter().enumerate() {
        let lb = lightbox.clone();
        dom::add_listener(card, "click", move |_| lb.borrow_mut().open(index));
    }

    if let Ok(Some(close)) = document.query_selector(LIGHTBOX_CLOSE_SELECTOR) {
        let lb = lightbox.clone();
        dom::add_listener(&close, "click", move |_| {
            lb.borrow_mut().apply(LightboxAction::Close)
        });
    }

    let lb = lightbox.clone();
    let backdrop: web::EventTarget = root.clone().into();
    dom::add_listener(&root, "click", move |ev| {
        if ev.target().as_ref() == Some(&backdrop) {
            lb.borrow_mut().apply(LightboxAction::Close);
        }
    });

    for (id, action) in [
        (LIGHTBOX_PREV_ID, LightboxAction::Prev),
        (LIGHTBOX_NEXT_ID, LightboxAction::Next),
    ] {
        let lb = lightbox.clone();
        dom::add_click_listener(document, id, move |ev| {
            // keep the backdrop handler from seeing this click
            ev.stop_propagation();
            lb.borrow_mut().apply(action);
        });
    }

    let lb = lightbox;
    dom::add_listener(document, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if let Some(action) = lightbox_action_for_key(&ev.key()) {
            lb.borrow_mut().apply(action);
        }
    });

    log::info!("[ui] lightbox wired with {} slides", cards.len());
    Ok(())
}
