/// Placement of a click ripple inside its button, in CSS pixels relative to
/// the button's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleBox {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// A square as large as the button's longer side, centered on the click.
#[inline]
pub fn ripple_box(rect_width: f64, rect_height: f64, click_x: f64, click_y: f64) -> RippleBox {
    let size = rect_width.max(rect_height);
    RippleBox {
        size,
        left: click_x - size / 2.0,
        top: click_y - size / 2.0,
    }
}
