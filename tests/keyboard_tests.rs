// Host-side tests for pure keyboard functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lightbox {
    include!("../src/lightbox.rs");
}

mod events {
    pub mod keyboard {
        include!("../src/events/keyboard.rs");
    }
}

use events::keyboard::lightbox_action_for_key;
use lightbox::LightboxAction;

#[test]
fn escape_closes() {
    assert_eq!(lightbox_action_for_key("Escape"), Some(LightboxAction::Close));
    assert_eq!(lightbox_action_for_key("Esc"), Some(LightboxAction::Close));
}

#[test]
fn arrows_page() {
    assert_eq!(lightbox_action_for_key("ArrowLeft"), Some(LightboxAction::Prev));
    assert_eq!(lightbox_action_for_key("ArrowRight"), Some(LightboxAction::Next));
    assert_eq!(lightbox_action_for_key("Left"), Some(LightboxAction::Prev));
    assert_eq!(lightbox_action_for_key("Right"), Some(LightboxAction::Next));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["ArrowUp", "ArrowDown", "Enter", " ", "escape", "a", ""] {
        assert_eq!(lightbox_action_for_key(key), None, "{:?}", key);
    }
}
