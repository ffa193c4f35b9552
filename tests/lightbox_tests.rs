// Host-side tests for the lightbox gallery state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lightbox {
    include!("../src/lightbox.rs");
}

use lightbox::{Gallery, LightboxAction};

#[test]
fn opens_only_valid_indices() {
    let mut g = Gallery::new(3);
    assert!(!g.open_at(3));
    assert!(!g.is_open());
    assert!(g.open_at(2));
    assert!(g.is_open());
    assert_eq!(g.current(), 2);
}

#[test]
fn paging_wraps_both_ways() {
    let mut g = Gallery::new(3);
    g.open_at(2);
    assert_eq!(g.apply(LightboxAction::Next), Some(0));
    assert_eq!(g.apply(LightboxAction::Prev), Some(2));
    assert_eq!(g.apply(LightboxAction::Prev), Some(1));
}

#[test]
fn close_ends_paging() {
    let mut g = Gallery::new(4);
    g.open_at(1);
    assert_eq!(g.apply(LightboxAction::Close), None);
    assert!(!g.is_open());
    // ignored while closed
    assert_eq!(g.apply(LightboxAction::Next), None);
    assert_eq!(g.current(), 1);
}

#[test]
fn empty_gallery_never_opens() {
    let mut g = Gallery::new(0);
    assert!(g.is_empty());
    assert!(!g.open_at(0));
    assert_eq!(g.next(), 0);
    assert_eq!(g.prev(), 0);
}
