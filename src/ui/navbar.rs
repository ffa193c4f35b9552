use crate::constants::{
    NAVBAR_BG_SCROLLED, NAVBAR_BG_TOP, NAVBAR_SCROLL_THRESHOLD, NAVBAR_SHADOW_SCROLLED,
    NAVBAR_SHADOW_TOP,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

/// Navbar look for a vertical scroll offset in CSS pixels.
#[inline]
pub fn navbar_style(scroll_y: f64) -> NavbarStyle {
    if scroll_y > NAVBAR_SCROLL_THRESHOLD {
        NavbarStyle {
            background: NAVBAR_BG_SCROLLED,
            box_shadow: NAVBAR_SHADOW_SCROLLED,
        }
    } else {
        NavbarStyle {
            background: NAVBAR_BG_TOP,
            box_shadow: NAVBAR_SHADOW_TOP,
        }
    }
}
