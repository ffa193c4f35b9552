/// What a lightbox control asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Prev,
    Next,
}

/// Paging state of the prototype gallery. Indices wrap in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    current: usize,
    open: bool,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            open: false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Open at `index`; out-of-range indices leave the gallery untouched.
    pub fn open_at(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Apply a control action. Returns the image index to show, or `None`
    /// once closed. Ignored while closed.
    pub fn apply(&mut self, action: LightboxAction) -> Option<usize> {
        if !self.open {
            return None;
        }
        match action {
            LightboxAction::Close => {
                self.close();
                None
            }
            LightboxAction::Prev => Some(self.prev()),
            LightboxAction::Next => Some(self.next()),
        }
    }
}
