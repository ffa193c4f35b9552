//! Canvas size and pointer state shared by every animation.
//!
//! Event handlers overwrite this between frames (last write wins); the
//! engines only read it inside `tick`/`render`.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    /// Latest pointer position in canvas pixels, `None` until the first move.
    pub pointer: Option<Vec2>,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            pointer: None,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = Some(Vec2::new(x, y));
        }
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_never_reaches_zero() {
        let mut vp = ViewportState::new(800.0, 600.0);
        vp.resize(0.0, -4.0);
        assert_eq!(vp.size(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn pointer_ignores_non_finite_positions() {
        let mut vp = ViewportState::new(800.0, 600.0);
        vp.set_pointer(10.0, 20.0);
        vp.set_pointer(f32::NAN, 5.0);
        assert_eq!(vp.pointer, Some(Vec2::new(10.0, 20.0)));
        vp.clear_pointer();
        assert!(vp.pointer.is_none());
    }
}
