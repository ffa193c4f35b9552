use crate::constants::SCROLL_SETTLE_MS;

/// Tracks whether the page is still scrolling.
///
/// Scrolling counts as active until `settle_ms` have passed since the most
/// recent scroll event. Timestamps are `performance.now()` milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct ScrollDebounce {
    last_scroll_ms: Option<f64>,
    settle_ms: f64,
}

impl ScrollDebounce {
    pub fn new(settle_ms: f64) -> Self {
        Self {
            last_scroll_ms: None,
            settle_ms,
        }
    }

    pub fn note_scroll(&mut self, now_ms: f64) {
        self.last_scroll_ms = Some(now_ms);
    }

    pub fn is_scrolling(&self, now_ms: f64) -> bool {
        self.last_scroll_ms
            .is_some_and(|t| now_ms - t < self.settle_ms)
    }
}

impl Default for ScrollDebounce {
    fn default() -> Self {
        Self::new(SCROLL_SETTLE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_after_quiet_period() {
        let mut s = ScrollDebounce::default();
        assert!(!s.is_scrolling(0.0));
        s.note_scroll(1000.0);
        assert!(s.is_scrolling(1000.0));
        assert!(s.is_scrolling(1149.0));
        assert!(!s.is_scrolling(1150.0));
        // a later event extends the window
        s.note_scroll(1140.0);
        assert!(s.is_scrolling(1200.0));
    }
}
