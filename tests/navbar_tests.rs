// Host-side tests for the navbar scroll styling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

mod ui {
    pub mod navbar {
        include!("../src/ui/navbar.rs");
    }
}

use constants::*;
use ui::navbar::navbar_style;

#[test]
fn top_of_page_uses_light_shadow() {
    let style = navbar_style(0.0);
    assert_eq!(style.background, NAVBAR_BG_TOP);
    assert_eq!(style.box_shadow, NAVBAR_SHADOW_TOP);
}

#[test]
fn threshold_itself_is_still_top() {
    assert_eq!(navbar_style(100.0), navbar_style(0.0));
}

#[test]
fn scrolled_past_threshold_switches_style() {
    let style = navbar_style(100.5);
    assert_eq!(style.background, NAVBAR_BG_SCROLLED);
    assert_eq!(style.box_shadow, NAVBAR_SHADOW_SCROLLED);
    assert_ne!(style, navbar_style(0.0));
}
